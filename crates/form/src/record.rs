//! Submission record model
//!
//! The structured snapshot of one form submission. Values are kept exactly
//! as submitted (no trimming, no validation); absent fields are empty.

use serde::{Deserialize, Serialize};

/// Ordinary Level results: six fixed subjects plus three optional basket
/// subject/result pairs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OlResults {
    pub buddhism: String,
    pub sinhala: String,
    pub english: String,
    pub maths: String,
    pub science: String,
    pub history: String,
    /// Basket `(subject, result)` pairs, positions 1..=3
    pub baskets: Vec<(String, String)>,
}

/// One parent's details
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentInfo {
    pub name: String,
    pub nic: String,
    pub occupation: String,
    pub address: String,
    pub contact: String,
}

/// One sibling entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sibling {
    pub name: String,
    pub age: String,
    pub occupation: String,
    pub status: String,
}

/// Complete submission record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    // Identity block
    pub dayscholar_no: String,
    pub name_initials: String,
    pub full_name: String,
    pub academic_stream: String,

    // Personal information
    pub gender: String,
    pub email: String,
    pub contact: String,
    pub dob: String,
    pub nationality: String,
    pub religion: String,

    // Physical measurements
    pub height: String,
    pub weight: String,
    pub chest: String,
    pub neck: String,
    pub blood_group: String,
    pub waist: String,
    pub boot_size: String,

    // Identity & banking
    pub nic: String,
    pub police_station: String,
    pub bank: String,
    pub account_no: String,

    // Education
    pub schools: Vec<String>,
    pub ol: OlResults,
    pub al_subjects: Vec<(String, String)>,
    pub al_english: String,
    pub al_gk: String,

    // Sports and activities
    pub sports: Vec<(String, String)>,
    pub activities: Vec<(String, String)>,
    pub languages: Vec<String>,

    // Family
    pub father: ParentInfo,
    pub mother: ParentInfo,
    pub siblings: Vec<Sibling>,
    pub relations: Vec<String>,
}
