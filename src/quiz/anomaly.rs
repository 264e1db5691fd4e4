use std::fmt;

/// Something the parser absorbed instead of failing on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Anomaly {
    MissingSectionMarker,
    OutOfRangeHeader { number: usize },
    DuplicateOrdinal { ordinal: usize },
    UnknownAnswerLetter { ordinal: usize, token: String },
    PartialAnswerToken { ordinal: usize, token: String },
    UnknownTrueFalse { ordinal: usize, answer: String },
    MissingCorrectAnswer { ordinal: usize },
    TruncatedOptions { ordinal: usize, count: usize },
    IgnoredOptions { ordinal: usize, count: usize },
}

impl Anomaly {
    pub fn ordinal(&self) -> Option<usize> {
        match self {
            Self::MissingSectionMarker | Self::OutOfRangeHeader { .. } => None,
            Self::DuplicateOrdinal { ordinal }
            | Self::UnknownAnswerLetter { ordinal, .. }
            | Self::PartialAnswerToken { ordinal, .. }
            | Self::UnknownTrueFalse { ordinal, .. }
            | Self::MissingCorrectAnswer { ordinal }
            | Self::TruncatedOptions { ordinal, .. }
            | Self::IgnoredOptions { ordinal, .. } => Some(*ordinal),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingSectionMarker => "missing_section_marker",
            Self::OutOfRangeHeader { .. } => "out_of_range_header",
            Self::DuplicateOrdinal { .. } => "duplicate_ordinal",
            Self::UnknownAnswerLetter { .. } => "unknown_answer_letter",
            Self::PartialAnswerToken { .. } => "partial_answer_token",
            Self::UnknownTrueFalse { .. } => "unknown_true_false",
            Self::MissingCorrectAnswer { .. } => "missing_correct_answer",
            Self::TruncatedOptions { .. } => "truncated_options",
            Self::IgnoredOptions { .. } => "ignored_options",
        }
    }
}

impl fmt::Display for Anomaly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSectionMarker => write!(f, "no \"Quiz Questions\" line found"),
            Self::OutOfRangeHeader { number } => {
                write!(f, "question number {} is outside 1..20, line ignored", number)
            }
            Self::DuplicateOrdinal { ordinal } => {
                write!(f, "question {} appears more than once, header ignored", ordinal)
            }
            Self::UnknownAnswerLetter { ordinal, token } => {
                write!(f, "question {}: unknown answer {:?}", ordinal, token)
            }
            Self::PartialAnswerToken { ordinal, token } => write!(
                f,
                "question {}: only the first letter of {:?} was used",
                ordinal, token
            ),
            Self::UnknownTrueFalse { ordinal, answer } => write!(
                f,
                "question {}: {:?} is neither true nor false, FALSE assumed",
                ordinal, answer
            ),
            Self::MissingCorrectAnswer { ordinal } => {
                write!(f, "question {}: no correct answer given", ordinal)
            }
            Self::TruncatedOptions { ordinal, count } => write!(
                f,
                "question {}: {} options found, only the first 5 are kept",
                ordinal, count
            ),
            Self::IgnoredOptions { ordinal, count } => write!(
                f,
                "question {}: {} options ignored for a true/false question",
                ordinal, count
            ),
        }
    }
}
