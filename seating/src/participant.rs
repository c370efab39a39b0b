use serde::{Deserialize, Serialize};

use crate::ParseError;

/// A participant of a tournament, identified by their display name.
///
/// Names are not required to be unique. The generator only ever looks at a
/// participant's position in the input list, so two entries with the same
/// name are two different participants.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Participant(pub String);

impl Participant {
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Participant {
    fn from(name: &str) -> Self {
        Participant(String::from(name))
    }
}

impl From<String> for Participant {
    fn from(name: String) -> Self {
        Participant(name)
    }
}

impl std::fmt::Display for Participant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

const SEPARATOR: &str = ". ";

/// Parses a numbered list such as
///
/// ```text
/// 1. Alice
/// 2. Bob 🎉
/// ```
///
/// Empty lines are skipped. The number in front of the separator is not
/// checked, only the part after the first `". "` is kept.
pub fn parse_participant_list(text: &str) -> Result<Vec<Participant>, ParseError> {
    let mut participants = Vec::new();
    for (line_idx, line) in text.lines().enumerate() {
        if line.is_empty() {
            continue;
        }
        match line.split_once(SEPARATOR) {
            Some((_, name)) => participants.push(Participant::from(name)),
            None => {
                return Err(ParseError::MissingSeparator {
                    line_number: line_idx + 1,
                    line: String::from(line),
                })
            }
        }
    }
    Ok(participants)
}

/// The inverse of [`parse_participant_list()`], numbering from 1.
pub fn format_participant_list(participants: &[Participant]) -> String {
    let mut result = String::new();
    for (idx, participant) in participants.iter().enumerate() {
        result += &format!("{}{}{}\n", idx + 1, SEPARATOR, participant);
    }
    result
}
