//! Faculty (teacher) model.
//!
//! A faculty member is qualified for a set of subjects and a set of
//! class-sections, and may mark individual (day, slot) pairs as
//! personally unavailable.

use serde::{Deserialize, Serialize};

use super::{DayOfWeek, Subject};

/// A teacher who can be assigned to periods.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Faculty {
    /// Unique faculty identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Subjects this faculty can teach.
    pub subject_ids: Vec<String>,
    /// Class-sections this faculty can teach in.
    #[serde(rename = "standardIds")]
    pub class_section_ids: Vec<String>,
    /// Personal unavailability.
    #[serde(default, rename = "unavailableSlots")]
    pub unavailable: Vec<Unavailability>,
}

/// A (day, slot-index) pair at which a faculty member cannot teach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Unavailability {
    pub day: DayOfWeek,
    pub slot_index: usize,
}

impl Faculty {
    /// Creates a faculty member with no qualifications.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: None,
            subject_ids: Vec::new(),
            class_section_ids: Vec::new(),
            unavailable: Vec::new(),
        }
    }

    /// Sets the email address.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Adds a qualified subject.
    pub fn with_subject(mut self, subject_id: impl Into<String>) -> Self {
        self.subject_ids.push(subject_id.into());
        self
    }

    /// Adds a qualified class-section.
    pub fn with_class_section(mut self, class_section_id: impl Into<String>) -> Self {
        self.class_section_ids.push(class_section_id.into());
        self
    }

    /// Marks a (day, slot-index) as unavailable.
    pub fn with_unavailable(mut self, day: DayOfWeek, slot_index: usize) -> Self {
        self.toggle_unavailable(day, slot_index);
        self
    }

    /// Whether this faculty can teach the subject in the class-section.
    pub fn is_qualified(&self, subject_id: &str, class_section_id: &str) -> bool {
        self.subject_ids.iter().any(|s| s == subject_id)
            && self.class_section_ids.iter().any(|c| c == class_section_id)
    }

    /// Whether the faculty marked this (day, slot-index) as unavailable.
    pub fn is_unavailable(&self, day: DayOfWeek, slot_index: usize) -> bool {
        self.unavailable
            .iter()
            .any(|u| u.day == day && u.slot_index == slot_index)
    }

    /// Flips the unavailability of a (day, slot-index).
    pub fn toggle_unavailable(&mut self, day: DayOfWeek, slot_index: usize) {
        let entry = Unavailability { day, slot_index };
        if let Some(pos) = self.unavailable.iter().position(|u| *u == entry) {
            self.unavailable.remove(pos);
        } else {
            self.unavailable.push(entry);
        }
    }

    /// Replaces the qualified subjects and recomputes the class-sections.
    pub fn set_subjects(&mut self, subject_ids: Vec<String>, subjects: &[Subject]) {
        self.subject_ids = subject_ids;
        self.sync_class_sections(subjects);
    }

    /// Recomputes `class_section_ids` as the union of the class-sections
    /// of the qualified subjects, in subject-list order.
    ///
    /// Subject ids not present in `subjects` contribute nothing.
    pub fn sync_class_sections(&mut self, subjects: &[Subject]) {
        let mut sections: Vec<String> = Vec::new();
        for subject in subjects {
            if self.subject_ids.contains(&subject.id)
                && !sections.contains(&subject.class_section_id)
            {
                sections.push(subject.class_section_id.clone());
            }
        }
        self.class_section_ids = sections;
    }
}
