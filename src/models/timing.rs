//! Weekly time grid: days, day configurations, and the global slot sequence.
//!
//! # Time Model
//! All class-sections share one ordered daily slot sequence. Each active
//! day uses a prefix of that sequence whose length is the day's lecture
//! count. Slots are addressed by their zero-based `index`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A teaching day of the week.
///
/// Ordered by weekday so that `BTreeMap<DayOfWeek, _>` iterates Monday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl DayOfWeek {
    /// All days in weekday order.
    pub const ALL: [DayOfWeek; 6] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
    ];

    /// Day name as displayed in timetable headers.
    pub fn name(&self) -> &'static str {
        match self {
            DayOfWeek::Monday => "Monday",
            DayOfWeek::Tuesday => "Tuesday",
            DayOfWeek::Wednesday => "Wednesday",
            DayOfWeek::Thursday => "Thursday",
            DayOfWeek::Friday => "Friday",
            DayOfWeek::Saturday => "Saturday",
        }
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A period within the global daily slot sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    /// Stable slot identifier.
    pub id: String,
    /// Zero-based position in the daily sequence.
    pub index: usize,
    /// Start time ("HH:MM").
    pub start_time: String,
    /// End time ("HH:MM").
    pub end_time: String,
    /// Recess slots are never allocatable.
    pub is_recess: bool,
    /// Optional display name (e.g., "Lunch Break").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl TimeSlot {
    /// Creates a teaching slot.
    pub fn new(
        id: impl Into<String>,
        index: usize,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            index,
            start_time: start_time.into(),
            end_time: end_time.into(),
            is_recess: false,
            name: None,
        }
    }

    /// Marks this slot as a recess.
    pub fn as_recess(mut self) -> Self {
        self.is_recess = true;
        self
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Time range label, e.g. "08:00 - 08:50".
    pub fn time_range(&self) -> String {
        format!("{} - {}", self.start_time, self.end_time)
    }
}

/// Per-day activation and lecture count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayConfig {
    pub day: DayOfWeek,
    pub is_active: bool,
    /// Number of leading global slots that apply to this day.
    pub lecture_count: usize,
}

impl DayConfig {
    /// Creates an active day config.
    pub fn active(day: DayOfWeek, lecture_count: usize) -> Self {
        Self {
            day,
            is_active: true,
            lecture_count,
        }
    }

    /// Creates an inactive day config.
    pub fn inactive(day: DayOfWeek) -> Self {
        Self {
            day,
            is_active: false,
            lecture_count: 0,
        }
    }

    /// Slots of the global sequence that apply to this day.
    ///
    /// Truncates to the sequence length if the lecture count exceeds it.
    pub fn applicable_slots<'a>(&self, global_slots: &'a [TimeSlot]) -> &'a [TimeSlot] {
        &global_slots[..self.lecture_count.min(global_slots.len())]
    }
}

/// Default daily slot sequence: five 50-minute periods with a recess at index 2.
pub fn default_slots() -> Vec<TimeSlot> {
    vec![
        TimeSlot::new("1", 0, "08:00", "08:50"),
        TimeSlot::new("2", 1, "08:50", "09:40"),
        TimeSlot::new("3", 2, "09:40", "10:00")
            .as_recess()
            .with_name("Recess"),
        TimeSlot::new("4", 3, "10:00", "10:50"),
        TimeSlot::new("5", 4, "10:50", "11:40"),
        TimeSlot::new("6", 5, "11:40", "12:30"),
    ]
}

/// Default week: Monday to Friday active with 6 lectures, Saturday off.
pub fn default_days() -> Vec<DayConfig> {
    DayOfWeek::ALL
        .iter()
        .map(|&day| DayConfig {
            day,
            is_active: day != DayOfWeek::Saturday,
            lecture_count: 6,
        })
        .collect()
}
