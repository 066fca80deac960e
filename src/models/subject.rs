//! Subject model.

use serde::{Deserialize, Serialize};

/// A subject taught in exactly one class-section.
///
/// Two subjects with the same name in different class-sections are
/// distinct entities with distinct ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    /// Unique subject identifier.
    pub id: String,
    /// Display name (e.g., "Mathematics").
    pub name: String,
    /// Owning class-section.
    #[serde(rename = "standardId")]
    pub class_section_id: String,
    /// Required periods per week.
    pub lectures_per_week: u32,
    /// Display color (e.g., "#f472b6").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Subject {
    /// Creates a new subject.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        class_section_id: impl Into<String>,
        lectures_per_week: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            class_section_id: class_section_id.into(),
            lectures_per_week,
            color: None,
        }
    }

    /// Sets the display color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subject_json_shape() {
        let s = Subject::new("s1", "Maths", "c1", 5).with_color("#38bdf8");
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json["standardId"], "c1");
        assert_eq!(json["lecturesPerWeek"], 5);
        assert_eq!(json["color"], "#38bdf8");
    }
}
