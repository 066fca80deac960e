//! Input validation for timetable generation.
//!
//! The allocator trusts its input. These checks belong to the calling
//! layer and run before generation. Fatal issues:
//! - An empty subject list
//! - Duplicate IDs
//! - Subjects referencing unknown class-sections
//! - Subjects with a zero weekly frequency
//! - A slot sequence whose indices do not match their positions
//!
//! Advisory issues, left behind by ordinary edits and tolerated by the
//! generator:
//! - Faculty referencing removed subjects or class-sections
//! - Days configured with more lectures than the slot sequence holds

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::models::TimetableConfig;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationErrorKind {
    /// No subjects are configured at all.
    NoSubjects,
    /// Two entities share the same ID.
    DuplicateId,
    /// A subject references a class-section that doesn't exist.
    UnknownClassSection,
    /// A faculty references a subject or class-section that doesn't exist.
    StaleFacultyReference,
    /// A subject requires zero periods per week.
    ZeroFrequency,
    /// A slot's index differs from its position in the sequence.
    SlotIndexMismatch,
    /// An active day uses more lectures than there are slots.
    LectureCountExceedsSlots,
}

impl ValidationErrorKind {
    /// Whether generation must be refused.
    ///
    /// Stale faculty references are ignored by qualification lookup, and
    /// an oversized lecture count is truncated to the slot sequence.
    pub fn is_fatal(&self) -> bool {
        match self {
            ValidationErrorKind::NoSubjects
            | ValidationErrorKind::DuplicateId
            | ValidationErrorKind::UnknownClassSection
            | ValidationErrorKind::ZeroFrequency
            | ValidationErrorKind::SlotIndexMismatch => true,
            ValidationErrorKind::StaleFacultyReference
            | ValidationErrorKind::LectureCountExceedsSlots => false,
        }
    }
}

impl ValidationError {
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn is_fatal(&self) -> bool {
        self.kind.is_fatal()
    }
}

/// Validates a timetable configuration.
///
/// Checks:
/// 1. At least one subject exists
/// 2. No duplicate class-section, subject, faculty, or slot IDs
/// 3. Every subject's class-section exists
/// 4. Every subject requires at least one period
/// 5. Slot `index` equals its position
///
/// # Returns
/// `Ok(())` if no fatal issue is found, `Err(errors)` with every fatal
/// issue. Advisory issues are reported by [`config_warnings`].
pub fn validate_config(config: &TimetableConfig) -> ValidationResult {
    let errors: Vec<ValidationError> = collect_issues(config)
        .into_iter()
        .filter(|e| e.is_fatal())
        .collect();
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Advisory issues: faculty references to removed subjects or
/// class-sections, and active days longer than the slot sequence.
pub fn config_warnings(config: &TimetableConfig) -> Vec<ValidationError> {
    collect_issues(config)
        .into_iter()
        .filter(|e| !e.is_fatal())
        .collect()
}

fn collect_issues(config: &TimetableConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if config.subjects.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::NoSubjects,
            "Please add subjects first",
        ));
    }

    let section_ids = collect_unique(
        config.class_sections.iter().map(|c| c.id.as_str()),
        "class-section",
        &mut errors,
    );
    let subject_ids = collect_unique(
        config.subjects.iter().map(|s| s.id.as_str()),
        "subject",
        &mut errors,
    );
    collect_unique(
        config.faculties.iter().map(|f| f.id.as_str()),
        "faculty",
        &mut errors,
    );
    collect_unique(
        config.global_slots.iter().map(|s| s.id.as_str()),
        "slot",
        &mut errors,
    );

    for subject in &config.subjects {
        if !section_ids.contains(subject.class_section_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownClassSection,
                format!(
                    "Subject '{}' references unknown class-section '{}'",
                    subject.id, subject.class_section_id
                ),
            ));
        }
        if subject.lectures_per_week == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroFrequency,
                format!("Subject '{}' requires zero lectures per week", subject.id),
            ));
        }
    }

    for faculty in &config.faculties {
        for subject_id in &faculty.subject_ids {
            if !subject_ids.contains(subject_id.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::StaleFacultyReference,
                    format!(
                        "Faculty '{}' references unknown subject '{}'",
                        faculty.id, subject_id
                    ),
                ));
            }
        }
        for section_id in &faculty.class_section_ids {
            if !section_ids.contains(section_id.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::StaleFacultyReference,
                    format!(
                        "Faculty '{}' references unknown class-section '{}'",
                        faculty.id, section_id
                    ),
                ));
            }
        }
    }

    for (position, slot) in config.global_slots.iter().enumerate() {
        if slot.index != position {
            errors.push(ValidationError::new(
                ValidationErrorKind::SlotIndexMismatch,
                format!(
                    "Slot '{}' has index {} but is at position {}",
                    slot.id, slot.index, position
                ),
            ));
        }
    }

    for day in config.active_days() {
        if day.lecture_count > config.global_slots.len() {
            errors.push(ValidationError::new(
                ValidationErrorKind::LectureCountExceedsSlots,
                format!(
                    "{} has {} lectures but only {} slots are defined",
                    day.day,
                    day.lecture_count,
                    config.global_slots.len()
                ),
            ));
        }
    }

    errors
}

/// Collects IDs into a set, reporting duplicates.
fn collect_unique<'a>(
    ids: impl Iterator<Item = &'a str>,
    entity: &str,
    errors: &mut Vec<ValidationError>,
) -> HashSet<&'a str> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate {entity} ID: {id}"),
            ));
        }
    }
    seen
}
