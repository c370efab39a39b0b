use serde::{Deserialize, Serialize};

use crate::Round;

/// A generated tournament, as it is stored and shown again later.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentRecord {
    pub name: String,
    /// ISO date, e.g. `2024-03-09`.
    pub date: String,
    /// One table per round, in the order they were generated.
    pub tables: Vec<Round>,
}

impl TournamentRecord {
    pub fn new(name: &str, date: &str, tables: Vec<Round>) -> Self {
        Self {
            name: String::from(name),
            date: String::from(date),
            tables,
        }
    }

    /// The name of the file this record is stored under.
    ///
    /// Spaces become `_` and colons become `-`. Any other character that is
    /// not alphanumeric, `-`, `_` or `.` becomes `_`, so the result never
    /// contains a path separator.
    pub fn file_name(&self) -> String {
        let stem: String = format!("{}_{}", self.name, self.date)
            .chars()
            .map(|c| match c {
                ':' => '-',
                c if c.is_alphanumeric() || matches!(c, '-' | '_' | '.') => c,
                _ => '_',
            })
            .collect();
        format!("{}.json", stem)
    }

    /// Pretty-printed JSON with a four space indent.
    pub fn to_json(&self) -> serde_json::Result<String> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut serializer)?;
        // serde_json only ever writes valid UTF-8
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Participant;

    fn record() -> TournamentRecord {
        TournamentRecord::new(
            "Spring Cup: Finals",
            "2024-03-09",
            vec![
                vec![Participant::from("Анна"), Participant::from("Bob")],
                vec![Participant::from("Bob"), Participant::from("Анна")],
            ],
        )
    }

    #[test]
    fn file_name_normalizes_separators() {
        assert_eq!(record().file_name(), "Spring_Cup-_Finals_2024-03-09.json");
    }

    #[test]
    fn file_name_has_no_path_separators() {
        let mut record = record();
        record.name = String::from("Cup 1/2");
        assert_eq!(record.file_name(), "Cup_1_2_2024-03-09.json");
        record.name = String::from("../escaped");
        assert_eq!(record.file_name(), ".._escaped_2024-03-09.json");
        record.name = String::from("a\\b 🎉");
        assert_eq!(record.file_name(), "a_b___2024-03-09.json");
    }

    #[test]
    fn file_name_keeps_non_ascii_letters() {
        let mut record = record();
        record.name = String::from("Кубок МИТ");
        assert_eq!(record.file_name(), "Кубок_МИТ_2024-03-09.json");
    }

    #[test]
    fn json_layout() {
        let json = record().to_json().unwrap();
        let expected = r#"{
    "name": "Spring Cup: Finals",
    "date": "2024-03-09",
    "tables": [
        [
            "Анна",
            "Bob"
        ],
        [
            "Bob",
            "Анна"
        ]
    ]
}"#;
        assert_eq!(json, expected);
    }

    #[test]
    fn json_is_read_back_verbatim() {
        let record = record();
        let json = record.to_json().unwrap();
        assert_eq!(TournamentRecord::from_json(&json).unwrap(), record);
    }

    #[test]
    fn missing_field_is_an_error() {
        assert!(TournamentRecord::from_json(r#"{"name": "x", "tables": []}"#).is_err());
    }
}
