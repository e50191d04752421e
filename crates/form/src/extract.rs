//! Extraction rules: form fields to submission record
//!
//! Array-style inputs (`name[]`) arrive as parallel lists. Paired lists of
//! unequal length are zipped to the shortest; extra entries are dropped.

use crate::fields::FormFields;
use crate::record::{OlResults, ParentInfo, Sibling, SubmissionRecord};

/// Zip two parallel lists, truncating to the shorter one
fn zip_pairs(a: Vec<String>, b: Vec<String>) -> Vec<(String, String)> {
    a.into_iter().zip(b).collect()
}

fn parent_info(fields: &FormFields, prefix: &str) -> ParentInfo {
    ParentInfo {
        name: fields.first(&format!("{prefix}Name")),
        nic: fields.first(&format!("{prefix}Nic")),
        occupation: fields.first(&format!("{prefix}Occ")),
        address: fields.first(&format!("{prefix}Address")),
        contact: fields.first(&format!("{prefix}Contact")),
    }
}

fn ol_results(fields: &FormFields) -> OlResults {
    let baskets = (1..=3)
        .map(|n| {
            (
                fields.first(&format!("ol_basket{n}_sub")),
                fields.first(&format!("ol_basket{n}_res")),
            )
        })
        .collect();
    OlResults {
        buddhism: fields.first("ol_buddhism"),
        sinhala: fields.first("ol_sinhala"),
        english: fields.first("ol_english"),
        maths: fields.first("ol_maths"),
        science: fields.first("ol_science"),
        history: fields.first("ol_history"),
        baskets,
    }
}

fn siblings(fields: &FormFields) -> Vec<Sibling> {
    let names = fields.all("sibName[]");
    let ages = fields.all("sibAge[]");
    let occupations = fields.all("sibOcc[]");
    let statuses = fields.all("sibStatus[]");

    names
        .into_iter()
        .zip(ages)
        .zip(occupations)
        .zip(statuses)
        .map(|(((name, age), occupation), status)| Sibling {
            name,
            age,
            occupation,
            status,
        })
        .collect()
}

impl SubmissionRecord {
    /// Build a record from submitted fields
    ///
    /// Total: missing fields yield empty strings or empty lists.
    pub fn from_fields(fields: &FormFields) -> Self {
        Self {
            dayscholar_no: fields.first("dayscholarNo"),
            name_initials: fields.first("nameInitials"),
            full_name: fields.first("fullName"),
            academic_stream: fields.first("academicStream"),

            gender: fields.first("gender"),
            email: fields.first("email"),
            contact: fields.first("contact"),
            dob: fields.first("dob"),
            nationality: fields.first("nationality"),
            religion: fields.first("religion"),

            height: fields.first("height"),
            weight: fields.first("weight"),
            chest: fields.first("chest"),
            neck: fields.first("neck"),
            blood_group: fields.first("bloodGroup"),
            waist: fields.first("waist"),
            boot_size: fields.first("bootSize"),

            nic: fields.first("nic"),
            police_station: fields.first("policeStation"),
            bank: fields.first("bank"),
            account_no: fields.first("accountNo"),

            schools: fields.all("school[]"),
            ol: ol_results(fields),
            al_subjects: zip_pairs(fields.all("al_sub[]"), fields.all("al_res[]")),
            al_english: fields.first("al_english"),
            al_gk: fields.first("al_gk"),

            sports: zip_pairs(fields.all("sport[]"), fields.all("sportLevel[]")),
            activities: zip_pairs(
                fields.all("activityType[]"),
                fields.all("activityPosition[]"),
            ),
            languages: fields.all("language"),

            father: parent_info(fields, "father"),
            mother: parent_info(fields, "mother"),
            siblings: siblings(fields),
            relations: fields.all("relation[]"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_fields_give_default_record() {
        let record = SubmissionRecord::from_fields(&FormFields::new());
        assert_eq!(record, SubmissionRecord::default());
    }

    #[test]
    fn test_scalars() {
        let fields: FormFields = vec![
            ("fullName", "Amal J. Silva"),
            ("dayscholarNo", "DS-042"),
            ("bloodGroup", "O+"),
            ("accountNo", "100200300"),
        ]
        .into_iter()
        .collect();
        let record = SubmissionRecord::from_fields(&fields);

        assert_eq!(record.full_name, "Amal J. Silva");
        assert_eq!(record.dayscholar_no, "DS-042");
        assert_eq!(record.blood_group, "O+");
        assert_eq!(record.account_no, "100200300");
        assert_eq!(record.email, "");
    }

    #[test]
    fn test_values_kept_verbatim() {
        let fields: FormFields = vec![("fullName", "  padded  ")].into_iter().collect();
        let record = SubmissionRecord::from_fields(&fields);
        assert_eq!(record.full_name, "  padded  ");
    }

    #[test]
    fn test_zip_truncates_to_shortest() {
        let fields: FormFields = vec![
            ("al_sub[]", "Physics"),
            ("al_sub[]", "Chemistry"),
            ("al_sub[]", "Combined Maths"),
            ("al_res[]", "A"),
            ("al_res[]", "B"),
        ]
        .into_iter()
        .collect();
        let record = SubmissionRecord::from_fields(&fields);

        assert_eq!(
            record.al_subjects,
            vec![
                ("Physics".to_string(), "A".to_string()),
                ("Chemistry".to_string(), "B".to_string()),
            ]
        );
    }

    #[test]
    fn test_zip_truncates_when_values_outnumber_subjects() {
        let fields: FormFields = vec![
            ("sport[]", "Cricket"),
            ("sportLevel[]", "School Captain"),
            ("sportLevel[]", "Zonal"),
        ]
        .into_iter()
        .collect();
        let record = SubmissionRecord::from_fields(&fields);
        assert_eq!(record.sports.len(), 1);
    }

    #[test]
    fn test_ol_baskets_keep_positions() {
        let fields: FormFields = vec![
            ("ol_buddhism", "A"),
            ("ol_basket1_sub", "Art"),
            ("ol_basket1_res", "B"),
            ("ol_basket3_sub", "Commerce"),
        ]
        .into_iter()
        .collect();
        let record = SubmissionRecord::from_fields(&fields);

        assert_eq!(record.ol.buddhism, "A");
        assert_eq!(record.ol.baskets.len(), 3);
        assert_eq!(
            record.ol.baskets[0],
            ("Art".to_string(), "B".to_string())
        );
        assert_eq!(record.ol.baskets[1], (String::new(), String::new()));
        assert_eq!(
            record.ol.baskets[2],
            ("Commerce".to_string(), String::new())
        );
    }

    #[test]
    fn test_languages_in_submission_order() {
        let fields: FormFields = vec![
            ("language", "Sinhala"),
            ("language", "English"),
            ("language", "Tamil"),
        ]
        .into_iter()
        .collect();
        let record = SubmissionRecord::from_fields(&fields);
        assert_eq!(record.languages, vec!["Sinhala", "English", "Tamil"]);
    }

    #[test]
    fn test_parents() {
        let fields: FormFields = vec![
            ("fatherName", "Sunil Silva"),
            ("fatherOcc", "Farmer"),
            ("motherName", "Kumari Silva"),
            ("motherContact", "0771234567"),
        ]
        .into_iter()
        .collect();
        let record = SubmissionRecord::from_fields(&fields);

        assert_eq!(record.father.name, "Sunil Silva");
        assert_eq!(record.father.occupation, "Farmer");
        assert_eq!(record.father.nic, "");
        assert_eq!(record.mother.contact, "0771234567");
    }

    #[test]
    fn test_siblings_zip_to_shortest() {
        let fields: FormFields = vec![
            ("sibName[]", "Kamal"),
            ("sibName[]", "Nimal"),
            ("sibAge[]", "20"),
            ("sibAge[]", "18"),
            ("sibOcc[]", "Student"),
            ("sibStatus[]", "Single"),
        ]
        .into_iter()
        .collect();
        let record = SubmissionRecord::from_fields(&fields);

        assert_eq!(record.siblings.len(), 1);
        assert_eq!(
            record.siblings[0],
            Sibling {
                name: "Kamal".to_string(),
                age: "20".to_string(),
                occupation: "Student".to_string(),
                status: "Single".to_string(),
            }
        );
    }
}
