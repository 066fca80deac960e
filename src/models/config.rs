//! Timetable configuration: the complete input to generation.

use serde::{Deserialize, Serialize};

use super::{default_days, default_slots, ClassSection, DayConfig, Faculty, Subject, TimeSlot};
use crate::error::TimetableError;

/// Everything the allocator reads: class-sections, the global slot
/// sequence, day configuration, subjects and faculty.
///
/// Field names follow the application's JSON layout (`standards`,
/// `globalSlots`, `dayConfigs`), so a saved application state can be
/// loaded directly; unrelated keys are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimetableConfig {
    #[serde(rename = "standards", default)]
    pub class_sections: Vec<ClassSection>,
    #[serde(default = "default_slots")]
    pub global_slots: Vec<TimeSlot>,
    #[serde(default = "default_days")]
    pub day_configs: Vec<DayConfig>,
    #[serde(default)]
    pub subjects: Vec<Subject>,
    #[serde(default)]
    pub faculties: Vec<Faculty>,
}

impl Default for TimetableConfig {
    fn default() -> Self {
        Self {
            class_sections: Vec::new(),
            global_slots: default_slots(),
            day_configs: default_days(),
            subjects: Vec::new(),
            faculties: Vec::new(),
        }
    }
}

impl TimetableConfig {
    /// Creates a configuration with the default week and slot grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, TimetableError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the configuration as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, TimetableError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Adds a class-section.
    pub fn with_class_section(mut self, class_section: ClassSection) -> Self {
        self.class_sections.push(class_section);
        self
    }

    /// Adds a subject.
    pub fn with_subject(mut self, subject: Subject) -> Self {
        self.subjects.push(subject);
        self
    }

    /// Adds a faculty member.
    pub fn with_faculty(mut self, faculty: Faculty) -> Self {
        self.faculties.push(faculty);
        self
    }

    /// Replaces the global slot sequence.
    pub fn with_slots(mut self, slots: Vec<TimeSlot>) -> Self {
        self.global_slots = slots;
        self
    }

    /// Replaces the day configuration.
    pub fn with_days(mut self, days: Vec<DayConfig>) -> Self {
        self.day_configs = days;
        self
    }

    /// Active days in configuration order.
    pub fn active_days(&self) -> impl Iterator<Item = &DayConfig> {
        self.day_configs.iter().filter(|d| d.is_active)
    }

    /// Subjects belonging to a class-section, in input order.
    pub fn subjects_for<'a>(
        &'a self,
        class_section_id: &'a str,
    ) -> impl Iterator<Item = &'a Subject> + 'a {
        self.subjects
            .iter()
            .filter(move |s| s.class_section_id == class_section_id)
    }

    pub fn class_section(&self, id: &str) -> Option<&ClassSection> {
        self.class_sections.iter().find(|c| c.id == id)
    }

    pub fn subject(&self, id: &str) -> Option<&Subject> {
        self.subjects.iter().find(|s| s.id == id)
    }

    pub fn faculty(&self, id: &str) -> Option<&Faculty> {
        self.faculties.iter().find(|f| f.id == id)
    }

    /// Non-recess slot-days available to one class-section over the week.
    pub fn teaching_slot_days(&self) -> usize {
        self.active_days()
            .map(|d| {
                d.applicable_slots(&self.global_slots)
                    .iter()
                    .filter(|s| !s.is_recess)
                    .count()
            })
            .sum()
    }
}
