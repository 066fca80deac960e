//! Mutable allocation state for one generation call.

use crate::models::{ScheduleCell, StandardSchedule, TimetableConfig};

use super::placement::Placement;
use super::FacultyOccupancy;

/// Output grids plus faculty occupancy, exclusively owned by one call.
///
/// Grids are index-aligned with `TimetableConfig::class_sections`.
#[derive(Debug, Clone)]
pub struct AllocationState {
    grids: Vec<StandardSchedule>,
    occupancy: FacultyOccupancy,
}

impl AllocationState {
    /// Creates one empty grid per class-section, with every active day present.
    pub fn new(config: &TimetableConfig) -> Self {
        let grids = config
            .class_sections
            .iter()
            .map(|section| {
                let mut grid = StandardSchedule::new(&section.id);
                for day in config.active_days() {
                    grid.day_mut(day.day);
                }
                grid
            })
            .collect();
        Self {
            grids,
            occupancy: FacultyOccupancy::new(),
        }
    }

    /// Grid of the class-section at `section_idx`.
    ///
    /// # Panics
    /// Panics if `section_idx` is out of range.
    pub fn grid(&self, section_idx: usize) -> &StandardSchedule {
        &self.grids[section_idx]
    }

    pub fn occupancy(&self) -> &FacultyOccupancy {
        &self.occupancy
    }

    /// Writes the placement into the grid and books its faculty.
    pub fn commit(&mut self, section_idx: usize, subject_id: &str, placement: &Placement<'_>) {
        let faculty_id = &placement.faculty.id;
        self.grids[section_idx]
            .day_mut(placement.day)
            .set(placement.slot_index, ScheduleCell::new(subject_id, faculty_id));
        self.occupancy
            .book(faculty_id, placement.day, placement.slot_index);
    }

    /// Consumes the state, returning the grids.
    pub fn into_grids(self) -> Vec<StandardSchedule> {
        self.grids
    }
}
