//! Class-section model.
//!
//! A class-section (grade + optional stream + optional division, taught in
//! one medium) owns its own independent weekly grid.

use serde::{Deserialize, Serialize};

/// A class-section ("standard") that receives its own timetable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassSection {
    /// Unique class-section identifier.
    pub id: String,
    /// Display name (e.g., "Std 10-A", "Std 12 Science-B").
    pub name: String,
    /// Grade (1-12).
    pub grade: u8,
    pub stream: Stream,
    pub medium: Medium,
    /// Division letter (e.g., "A").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub division: Option<String>,
}

/// Higher-secondary stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stream {
    #[default]
    None,
    Science,
    Commerce,
    Arts,
}

/// Language of instruction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Medium {
    #[default]
    English,
    Gujarati,
    Hindi,
}

impl ClassSection {
    /// Creates a class-section with a generated display name.
    pub fn new(id: impl Into<String>, grade: u8) -> Self {
        Self {
            id: id.into(),
            name: format!("Std {grade}"),
            grade,
            stream: Stream::None,
            medium: Medium::English,
            division: None,
        }
    }

    /// Sets the stream and regenerates the display name.
    pub fn with_stream(mut self, stream: Stream) -> Self {
        self.stream = stream;
        self.name = self.display_name();
        self
    }

    /// Sets the division and regenerates the display name.
    pub fn with_division(mut self, division: impl Into<String>) -> Self {
        self.division = Some(division.into());
        self.name = self.display_name();
        self
    }

    /// Sets the medium.
    pub fn with_medium(mut self, medium: Medium) -> Self {
        self.medium = medium;
        self
    }

    /// Overrides the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds a name like "Std 10-A" or "Std 12 Science-B".
    fn display_name(&self) -> String {
        let mut name = format!("Std {}", self.grade);
        if self.stream != Stream::None {
            name.push(' ');
            name.push_str(self.stream.label());
        }
        if let Some(division) = &self.division {
            name.push('-');
            name.push_str(division);
        }
        name
    }
}

impl Stream {
    pub fn label(&self) -> &'static str {
        match self {
            Stream::None => "None",
            Stream::Science => "Science",
            Stream::Commerce => "Commerce",
            Stream::Arts => "Arts",
        }
    }
}
