//! Timetable (solution) model.
//!
//! A `FullSchedule` is one generated, named, timestamped snapshot holding
//! a weekly grid (`StandardSchedule`) for every class-section. Each grid
//! maps active days to slot-indexed cells; an absent cell is a free period.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

use super::DayOfWeek;
use crate::error::TimetableError;

/// Default name given to a freshly generated timetable.
pub const DEFAULT_SCHEDULE_NAME: &str = "Generated Schedule";

/// One assigned period: a subject taught by a faculty member.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleCell {
    pub subject_id: String,
    pub faculty_id: String,
}

impl ScheduleCell {
    /// Creates a new cell.
    pub fn new(subject_id: impl Into<String>, faculty_id: impl Into<String>) -> Self {
        Self {
            subject_id: subject_id.into(),
            faculty_id: faculty_id.into(),
        }
    }
}

/// One day of one class-section: slot index → cell.
///
/// Serialized as a JSON object keyed by slot index. `null` entries are
/// accepted on input and treated as free periods.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DailySchedule {
    cells: BTreeMap<usize, ScheduleCell>,
}

impl<'de> Deserialize<'de> for DailySchedule {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<usize, Option<ScheduleCell>>::deserialize(deserializer)?;
        Ok(Self {
            cells: raw
                .into_iter()
                .filter_map(|(slot, cell)| cell.map(|c| (slot, c)))
                .collect(),
        })
    }
}

impl DailySchedule {
    /// Creates an empty day.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cell at a slot index, if occupied.
    #[inline]
    pub fn get(&self, slot_index: usize) -> Option<&ScheduleCell> {
        self.cells.get(&slot_index)
    }

    /// Whether the slot holds a cell.
    #[inline]
    pub fn is_occupied(&self, slot_index: usize) -> bool {
        self.cells.contains_key(&slot_index)
    }

    /// Whether the slot holds the given subject.
    pub fn holds_subject(&self, slot_index: usize, subject_id: &str) -> bool {
        self.get(slot_index)
            .is_some_and(|c| c.subject_id == subject_id)
    }

    /// Writes a cell, replacing any previous content.
    pub fn set(&mut self, slot_index: usize, cell: ScheduleCell) {
        self.cells.insert(slot_index, cell);
    }

    /// Frees a slot, returning its previous cell.
    pub fn clear(&mut self, slot_index: usize) -> Option<ScheduleCell> {
        self.cells.remove(&slot_index)
    }

    /// Number of cells holding the given subject.
    pub fn subject_count(&self, subject_id: &str) -> usize {
        self.cells
            .values()
            .filter(|c| c.subject_id == subject_id)
            .count()
    }

    /// Occupied cells in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &ScheduleCell)> {
        self.cells.iter().map(|(&slot, cell)| (slot, cell))
    }

    /// Number of occupied cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the day has no occupied cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// The weekly grid of one class-section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandardSchedule {
    #[serde(rename = "standardId")]
    pub class_section_id: String,
    pub days: BTreeMap<DayOfWeek, DailySchedule>,
}

impl StandardSchedule {
    /// Creates a grid with no days.
    pub fn new(class_section_id: impl Into<String>) -> Self {
        Self {
            class_section_id: class_section_id.into(),
            days: BTreeMap::new(),
        }
    }

    /// Returns the day, creating it empty if missing.
    pub fn day_mut(&mut self, day: DayOfWeek) -> &mut DailySchedule {
        self.days.entry(day).or_default()
    }

    /// Returns the day, if present.
    pub fn day(&self, day: DayOfWeek) -> Option<&DailySchedule> {
        self.days.get(&day)
    }

    /// Cell at (day, slot-index), if occupied.
    pub fn cell(&self, day: DayOfWeek, slot_index: usize) -> Option<&ScheduleCell> {
        self.days.get(&day).and_then(|d| d.get(slot_index))
    }

    /// All occupied cells as (day, slot-index, cell).
    pub fn cells(&self) -> impl Iterator<Item = (DayOfWeek, usize, &ScheduleCell)> {
        self.days
            .iter()
            .flat_map(|(&day, daily)| daily.iter().map(move |(slot, cell)| (day, slot, cell)))
    }

    /// Total periods allocated to a subject over the week.
    pub fn subject_total(&self, subject_id: &str) -> usize {
        self.days.values().map(|d| d.subject_count(subject_id)).sum()
    }

    /// Number of occupied cells over the week.
    pub fn cell_count(&self) -> usize {
        self.days.values().map(DailySchedule::len).sum()
    }
}

/// A complete timetable across all class-sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FullSchedule {
    /// Unique timetable identifier.
    pub id: String,
    /// User-facing version name.
    pub name: String,
    /// Creation time (Unix epoch ms).
    pub created_at: i64,
    /// One grid per class-section.
    pub schedules: Vec<StandardSchedule>,
}

impl FullSchedule {
    /// Creates a timetable with a fresh id, the current timestamp and the
    /// default name.
    pub fn new(schedules: Vec<StandardSchedule>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: DEFAULT_SCHEDULE_NAME.to_string(),
            created_at: chrono::Utc::now().timestamp_millis(),
            schedules,
        }
    }

    /// Sets the name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Renames the timetable.
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Grid for a class-section.
    pub fn schedule_for(&self, class_section_id: &str) -> Option<&StandardSchedule> {
        self.schedules
            .iter()
            .find(|s| s.class_section_id == class_section_id)
    }

    fn schedule_for_mut(
        &mut self,
        class_section_id: &str,
    ) -> Result<&mut StandardSchedule, TimetableError> {
        self.schedules
            .iter_mut()
            .find(|s| s.class_section_id == class_section_id)
            .ok_or_else(|| TimetableError::UnknownClassSection(class_section_id.to_string()))
    }

    /// Overwrites one cell (manual edit).
    ///
    /// No qualification or double-booking checks are made.
    pub fn set_cell(
        &mut self,
        class_section_id: &str,
        day: DayOfWeek,
        slot_index: usize,
        cell: ScheduleCell,
    ) -> Result<(), TimetableError> {
        self.schedule_for_mut(class_section_id)?
            .day_mut(day)
            .set(slot_index, cell);
        Ok(())
    }

    /// Frees one cell (manual edit). Returns the previous cell.
    pub fn clear_cell(
        &mut self,
        class_section_id: &str,
        day: DayOfWeek,
        slot_index: usize,
    ) -> Result<Option<ScheduleCell>, TimetableError> {
        Ok(self
            .schedule_for_mut(class_section_id)?
            .day_mut(day)
            .clear(slot_index))
    }

    /// Every occupied cell as (class-section id, day, slot-index, cell).
    pub fn bookings(&self) -> impl Iterator<Item = (&str, DayOfWeek, usize, &ScheduleCell)> {
        self.schedules.iter().flat_map(|s| {
            s.cells()
                .map(move |(day, slot, cell)| (s.class_section_id.as_str(), day, slot, cell))
        })
    }

    /// Cells taught by a faculty member as (class-section id, day, slot-index).
    pub fn bookings_for_faculty(&self, faculty_id: &str) -> Vec<(&str, DayOfWeek, usize)> {
        self.bookings()
            .filter(|(_, _, _, cell)| cell.faculty_id == faculty_id)
            .map(|(section, day, slot, _)| (section, day, slot))
            .collect()
    }

    /// Total occupied cells across all class-sections.
    pub fn assignment_count(&self) -> usize {
        self.schedules.iter().map(StandardSchedule::cell_count).sum()
    }
}
