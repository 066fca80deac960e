//! Error types for timetable operations.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors surfaced by fallible timetable operations.
///
/// The allocator itself never fails; these cover configuration loading,
/// pre-generation validation, and edits against a stored schedule.
#[derive(Debug, Error)]
pub enum TimetableError {
    /// Configuration failed pre-generation validation.
    #[error("invalid timetable configuration: {} issue(s), first: {}", .0.len(), first_message(.0))]
    InvalidConfig(Vec<ValidationError>),

    /// A class-section id has no schedule in this timetable.
    #[error("unknown class-section '{0}'")]
    UnknownClassSection(String),

    /// A schedule id is not present in the version history.
    #[error("unknown schedule '{0}'")]
    UnknownSchedule(String),

    /// Configuration JSON could not be parsed.
    #[error("failed to parse timetable configuration: {0}")]
    Json(#[from] serde_json::Error),
}

impl TimetableError {
    /// Returns the validation issues, if this is a validation failure.
    pub fn validation_errors(&self) -> Option<&[ValidationError]> {
        match self {
            TimetableError::InvalidConfig(errors) => Some(errors),
            _ => None,
        }
    }
}

fn first_message(errors: &[ValidationError]) -> &str {
    errors.first().map(|e| e.message.as_str()).unwrap_or("none")
}
