//! Section datasets
//!
//! Pure builders from a submission record to the tables drawn under each
//! section heading. Rows whose formatted value is blank are dropped; a table
//! with no surviving rows is not emitted. Headings themselves always render,
//! so the builders return possibly-empty table lists.

use crate::canvas::TableData;
use intake_form::{ParentInfo, SubmissionRecord};

/// One report section: heading title plus its surviving tables
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub title: &'static str,
    pub tables: Vec<TableData>,
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Drop rows whose value is blank after formatting
fn retain_rows(rows: Vec<(String, String)>) -> Vec<(String, String)> {
    rows.into_iter().filter(|(_, v)| !is_blank(v)).collect()
}

fn push_if_nonempty(out: &mut Vec<TableData>, table: TableData) {
    if !table.is_empty() {
        out.push(table);
    }
}

fn row(label: &str, value: &str) -> (String, String) {
    (label.to_string(), value.to_string())
}

/// `"{left} - {right}"` with `N/A` standing in for an empty right side
fn dashed_pair(left: &str, right: &str) -> String {
    let right = if right.is_empty() { "N/A" } else { right };
    format!("{left} - {right}")
}

/// Suffix a measurement unit, but only onto a non-empty raw value
fn with_unit(raw: &str, unit: &str) -> String {
    if raw.is_empty() {
        String::new()
    } else {
        format!("{raw} {unit}")
    }
}

pub fn personal(record: &SubmissionRecord) -> Vec<TableData> {
    let rows = retain_rows(vec![
        row("Gender", &record.gender),
        row("Email Address", &record.email),
        row("Contact Number", &record.contact),
        row("Date of Birth", &record.dob),
        row("Nationality", &record.nationality),
        row("Religion", &record.religion),
    ]);
    let mut out = Vec::new();
    push_if_nonempty(&mut out, TableData::new("Basic Details", rows));
    out
}

pub fn physical(record: &SubmissionRecord) -> Vec<TableData> {
    let rows = retain_rows(vec![
        ("Height".to_string(), with_unit(&record.height, "cm")),
        ("Weight".to_string(), with_unit(&record.weight, "kg")),
        ("Chest".to_string(), with_unit(&record.chest, "cm")),
        ("Neck".to_string(), with_unit(&record.neck, "cm")),
        ("Waist".to_string(), with_unit(&record.waist, "cm")),
        row("Blood Group", &record.blood_group),
        row("Boot Size", &record.boot_size),
    ]);
    let mut out = Vec::new();
    push_if_nonempty(&mut out, TableData::new("Body Measurements", rows));
    out
}

pub fn identity_banking(record: &SubmissionRecord) -> Vec<TableData> {
    let rows = retain_rows(vec![
        row("National Identity Card", &record.nic),
        row("Police Station", &record.police_station),
        row("Bank", &record.bank),
        row("Account Number", &record.account_no),
    ]);
    let mut out = Vec::new();
    push_if_nonempty(&mut out, TableData::new("Official Documents", rows));
    out
}

pub fn educational(record: &SubmissionRecord) -> Vec<TableData> {
    let mut out = Vec::new();

    let school_rows = retain_rows(
        record
            .schools
            .iter()
            .enumerate()
            .map(|(i, school)| (format!("School {}", i + 1), school.clone()))
            .collect(),
    );
    push_if_nonempty(&mut out, TableData::new("Schools Attended", school_rows));

    let mut ol_rows = retain_rows(vec![
        row("Buddhism", &record.ol.buddhism),
        row("Sinhala", &record.ol.sinhala),
        row("English", &record.ol.english),
        row("Mathematics", &record.ol.maths),
        row("Science", &record.ol.science),
        row("History", &record.ol.history),
    ]);
    for (i, (subject, result)) in record.ol.baskets.iter().enumerate() {
        if !is_blank(subject) {
            ol_rows.push((
                format!("Basket Subject {}", i + 1),
                dashed_pair(subject, result),
            ));
        }
    }
    push_if_nonempty(
        &mut out,
        TableData::new("Ordinary Level (O/L) Results", ol_rows).with_head("Subject", "Grade"),
    );

    let mut al_rows: Vec<(String, String)> = record
        .al_subjects
        .iter()
        .enumerate()
        .map(|(i, (subject, result))| {
            (format!("A/L Subject {}", i + 1), dashed_pair(subject, result))
        })
        .filter(|(_, value)| !value.contains(" - N/A") && value.trim() != "-")
        .collect();
    if !is_blank(&record.al_english) {
        al_rows.push(row("A/L English", &record.al_english));
    }
    if !is_blank(&record.al_gk) {
        al_rows.push(row("General Knowledge", &record.al_gk));
    }
    push_if_nonempty(
        &mut out,
        TableData::new("Advanced Level (A/L) Results", al_rows).with_head("Subject", "Grade"),
    );

    out
}

pub fn sports_activities(record: &SubmissionRecord) -> Vec<TableData> {
    let mut out = Vec::new();

    let sport_rows: Vec<(String, String)> = record
        .sports
        .iter()
        .enumerate()
        .map(|(i, (sport, level))| (format!("Sport {}", i + 1), dashed_pair(sport, level)))
        .filter(|(_, value)| value != " - N/A" && value.trim() != "-")
        .collect();
    push_if_nonempty(
        &mut out,
        TableData::new("Sports Achievements", sport_rows).with_head("Sport", "Level/Achievement"),
    );

    let activity_rows: Vec<(String, String)> = record
        .activities
        .iter()
        .enumerate()
        .map(|(i, (activity, position))| {
            (format!("Activity {}", i + 1), dashed_pair(activity, position))
        })
        .filter(|(_, value)| value != " - N/A" && value.trim() != "-")
        .collect();
    push_if_nonempty(
        &mut out,
        TableData::new("Extra-Curricular Activities", activity_rows)
            .with_head("Activity", "Position/Role"),
    );

    if !record.languages.is_empty() {
        out.push(TableData::new(
            "Language Skills",
            vec![(
                "Language Proficiency".to_string(),
                record.languages.join(", "),
            )],
        ));
    }

    out
}

fn parent_table(caption: &str, parent: &ParentInfo) -> Option<TableData> {
    if is_blank(&parent.name) {
        return None;
    }
    let rows = retain_rows(vec![
        row("Name", &parent.name),
        row("NIC", &parent.nic),
        row("Occupation", &parent.occupation),
        row("Address", &parent.address),
        row("Contact", &parent.contact),
    ]);
    if rows.is_empty() {
        None
    } else {
        Some(TableData::new(caption, rows))
    }
}

pub fn family(record: &SubmissionRecord) -> Vec<TableData> {
    let mut out = Vec::new();

    if let Some(table) = parent_table("Father's Information", &record.father) {
        out.push(table);
    }
    if let Some(table) = parent_table("Mother's Information", &record.mother) {
        out.push(table);
    }

    let sibling_rows: Vec<(String, String)> = record
        .siblings
        .iter()
        .enumerate()
        .map(|(i, sib)| {
            (
                format!("Sibling {}", i + 1),
                format!(
                    "Name: {}, Age: {}, Occupation: {}, Status: {}",
                    sib.name, sib.age, sib.occupation, sib.status
                ),
            )
        })
        .filter(|(_, value)| value != "Name: , Age: , Occupation: , Status: ")
        .collect();
    push_if_nonempty(&mut out, TableData::new("Siblings Information", sibling_rows));

    let relation_rows = retain_rows(
        record
            .relations
            .iter()
            .enumerate()
            .map(|(i, rel)| (format!("Relation {}", i + 1), rel.clone()))
            .collect(),
    );
    push_if_nonempty(
        &mut out,
        TableData::new("Relations in Tri-Forces/Police", relation_rows)
            .with_head("Relationship", "Details"),
    );

    out
}

/// The six report sections in their fixed order
pub fn build_sections(record: &SubmissionRecord) -> Vec<Section> {
    vec![
        Section {
            title: "PERSONAL INFORMATION",
            tables: personal(record),
        },
        Section {
            title: "PHYSICAL MEASUREMENTS",
            tables: physical(record),
        },
        Section {
            title: "IDENTITY & BANKING DETAILS",
            tables: identity_banking(record),
        },
        Section {
            title: "EDUCATIONAL BACKGROUND",
            tables: educational(record),
        },
        Section {
            title: "SPORTS & EXTRA-CURRICULAR ACTIVITIES",
            tables: sports_activities(record),
        },
        Section {
            title: "FAMILY INFORMATION",
            tables: family(record),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn find_row<'a>(table: &'a TableData, label: &str) -> Option<&'a str> {
        table
            .rows
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn test_personal_drops_blank_rows() {
        let record = SubmissionRecord {
            gender: "Male".to_string(),
            email: "   ".to_string(),
            religion: "Buddhism".to_string(),
            ..Default::default()
        };
        let tables = personal(&record);

        assert_eq!(tables.len(), 1);
        assert_eq!(
            tables[0].rows,
            vec![
                ("Gender".to_string(), "Male".to_string()),
                ("Religion".to_string(), "Buddhism".to_string()),
            ]
        );
    }

    #[test]
    fn test_personal_all_blank_emits_nothing() {
        assert!(personal(&SubmissionRecord::default()).is_empty());
    }

    #[test]
    fn test_physical_units() {
        let record = SubmissionRecord {
            height: "170".to_string(),
            weight: String::new(),
            blood_group: "O+".to_string(),
            ..Default::default()
        };
        let tables = physical(&record);

        assert_eq!(tables.len(), 1);
        let table = &tables[0];
        assert_eq!(find_row(table, "Height"), Some("170 cm"));
        assert_eq!(find_row(table, "Weight"), None);
        assert_eq!(find_row(table, "Blood Group"), Some("O+"));
    }

    #[test]
    fn test_physical_weight_uses_kg() {
        let record = SubmissionRecord {
            weight: "62".to_string(),
            ..Default::default()
        };
        assert_eq!(find_row(&physical(&record)[0], "Weight"), Some("62 kg"));
    }

    #[test]
    fn test_schools_numbered_and_filtered() {
        let record = SubmissionRecord {
            schools: vec![
                "Royal College".to_string(),
                "  ".to_string(),
                "Ananda College".to_string(),
            ],
            ..Default::default()
        };
        let tables = educational(&record);
        let schools = &tables[0];

        assert_eq!(schools.caption, "Schools Attended");
        assert_eq!(
            schools.rows,
            vec![
                ("School 1".to_string(), "Royal College".to_string()),
                ("School 3".to_string(), "Ananda College".to_string()),
            ]
        );
    }

    #[test]
    fn test_ol_baskets_gated_on_subject() {
        let mut record = SubmissionRecord::default();
        record.ol.buddhism = "A".to_string();
        record.ol.baskets = vec![
            ("Art".to_string(), "B".to_string()),
            (String::new(), "C".to_string()),
            ("Commerce".to_string(), String::new()),
        ];
        let tables = educational(&record);
        let ol = &tables[0];

        assert_eq!(ol.caption, "Ordinary Level (O/L) Results");
        assert_eq!(ol.head, ("Subject".to_string(), "Grade".to_string()));
        assert_eq!(find_row(ol, "Basket Subject 1"), Some("Art - B"));
        assert_eq!(find_row(ol, "Basket Subject 2"), None);
        assert_eq!(find_row(ol, "Basket Subject 3"), Some("Commerce - N/A"));
    }

    #[test]
    fn test_al_subject_without_result_is_suppressed() {
        let record = SubmissionRecord {
            al_subjects: vec![
                ("Physics".to_string(), "A".to_string()),
                ("Chemistry".to_string(), String::new()),
            ],
            ..Default::default()
        };
        let tables = educational(&record);

        assert_eq!(tables.len(), 1);
        let al = &tables[0];
        assert_eq!(al.caption, "Advanced Level (A/L) Results");
        assert_eq!(find_row(al, "A/L Subject 1"), Some("Physics - A"));
        assert_eq!(find_row(al, "A/L Subject 2"), None);
    }

    #[test]
    fn test_al_english_without_subject_pairs() {
        let record = SubmissionRecord {
            al_english: "B".to_string(),
            al_gk: "72".to_string(),
            ..Default::default()
        };
        let tables = educational(&record);

        assert_eq!(tables.len(), 1);
        let al = &tables[0];
        assert_eq!(find_row(al, "A/L English"), Some("B"));
        assert_eq!(find_row(al, "General Knowledge"), Some("72"));
    }

    #[test]
    fn test_sports_suppression() {
        let record = SubmissionRecord {
            sports: vec![
                ("Cricket".to_string(), "School Captain".to_string()),
                (String::new(), String::new()),
            ],
            ..Default::default()
        };
        let tables = sports_activities(&record);

        assert_eq!(tables.len(), 1);
        let sports = &tables[0];
        assert_eq!(sports.caption, "Sports Achievements");
        assert_eq!(
            sports.head,
            ("Sport".to_string(), "Level/Achievement".to_string())
        );
        assert_eq!(sports.rows.len(), 1);
        assert_eq!(
            find_row(sports, "Sport 1"),
            Some("Cricket - School Captain")
        );
    }

    #[test]
    fn test_sport_without_level_keeps_na() {
        let record = SubmissionRecord {
            sports: vec![("Rugby".to_string(), String::new())],
            ..Default::default()
        };
        let tables = sports_activities(&record);
        assert_eq!(find_row(&tables[0], "Sport 1"), Some("Rugby - N/A"));
    }

    #[test]
    fn test_languages_single_joined_row() {
        let record = SubmissionRecord {
            languages: vec![
                "Sinhala".to_string(),
                "English".to_string(),
                "Tamil".to_string(),
            ],
            ..Default::default()
        };
        let tables = sports_activities(&record);

        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].caption, "Language Skills");
        assert_eq!(
            tables[0].rows,
            vec![(
                "Language Proficiency".to_string(),
                "Sinhala, English, Tamil".to_string()
            )]
        );
    }

    #[test]
    fn test_father_table_gated_on_name() {
        let record = SubmissionRecord {
            father: ParentInfo {
                name: String::new(),
                occupation: "Farmer".to_string(),
                ..Default::default()
            },
            mother: ParentInfo {
                name: "Kumari Silva".to_string(),
                contact: "0771234567".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };
        let tables = family(&record);

        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].caption, "Mother's Information");
        assert_eq!(find_row(&tables[0], "Contact"), Some("0771234567"));
    }

    #[test]
    fn test_blank_sibling_suppressed() {
        let record = SubmissionRecord {
            siblings: vec![
                intake_form::Sibling {
                    name: "Kamal".to_string(),
                    age: "20".to_string(),
                    occupation: "Student".to_string(),
                    status: "Single".to_string(),
                },
                intake_form::Sibling::default(),
            ],
            ..Default::default()
        };
        let tables = family(&record);

        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].rows.len(), 1);
        assert_eq!(
            find_row(&tables[0], "Sibling 1"),
            Some("Name: Kamal, Age: 20, Occupation: Student, Status: Single")
        );
    }

    #[test]
    fn test_build_sections_fixed_order() {
        let sections = build_sections(&SubmissionRecord::default());
        let titles: Vec<_> = sections.iter().map(|s| s.title).collect();

        assert_eq!(
            titles,
            vec![
                "PERSONAL INFORMATION",
                "PHYSICAL MEASUREMENTS",
                "IDENTITY & BANKING DETAILS",
                "EDUCATIONAL BACKGROUND",
                "SPORTS & EXTRA-CURRICULAR ACTIVITIES",
                "FAMILY INFORMATION",
            ]
        );
        assert!(sections.iter().all(|s| s.tables.is_empty()));
    }
}
