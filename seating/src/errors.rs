/// The error type for [`generate()`](crate::generate) and [`RoundGenerator::new()`](crate::RoundGenerator::new).
#[derive(Debug, PartialEq, Eq)]
pub enum GenerateError {
    NoParticipants,
}

impl std::error::Error for GenerateError {}

impl std::fmt::Display for GenerateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerateError::NoParticipants => write!(f, "The participant list is empty"),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
/// The error type for [`parse_participant_list()`](crate::parse_participant_list).
pub enum ParseError {
    MissingSeparator { line_number: usize, line: String },
}

impl std::error::Error for ParseError {}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::MissingSeparator { line_number, line } => write!(
                f,
                "Line {} is not of the form '<number>. <name>': {:?}",
                line_number, line
            ),
        }
    }
}
