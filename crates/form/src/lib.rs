//! Form field extraction
//!
//! Turns submitted form data into a structured record:
//! - `fields` - ordered multimap of submitted `(name, value)` pairs
//! - `record` - the submission record model (serde)
//! - `extract` - extraction rules from fields to record
//!
//! Extraction is total: missing fields become empty strings or empty lists,
//! never errors.

pub mod extract;
pub mod fields;
pub mod record;

pub use fields::FormFields;
pub use record::{OlResults, ParentInfo, Sibling, SubmissionRecord};
