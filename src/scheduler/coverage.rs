//! Timetable coverage metrics.
//!
//! Summarizes how well a generated timetable meets the configured weekly
//! frequencies and how the teaching load is spread across faculty.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Required periods | Sum of `lectures_per_week` over scheduled subjects |
//! | Allocated periods | Cells holding a scheduled subject |
//! | Fill rate | allocated / required |
//! | Slot-days | Non-recess (day, slot) pairs per class-section |
//! | Faculty load | Cells per faculty member across all class-sections |

use std::collections::HashMap;

use crate::models::{FullSchedule, TimetableConfig};

/// Coverage of one generated timetable against its configuration.
#[derive(Debug, Clone)]
pub struct CoverageReport {
    /// Periods requested by subjects of scheduled class-sections.
    pub required_periods: u32,
    /// Periods actually placed for those subjects.
    pub allocated_periods: u32,
    /// allocated / required (1.0 when nothing is required).
    pub fill_rate: f64,
    /// Non-recess slot-days available to each class-section.
    pub slot_days_per_section: usize,
    /// Cells per faculty id.
    pub load_by_faculty: HashMap<String, usize>,
    /// Subjects whose class-section has a grid but that got fewer periods
    /// than required: (subject id, allocated, required).
    pub under_allocated: Vec<(String, u32, u32)>,
}

impl CoverageReport {
    /// Computes coverage from a timetable and the configuration it was
    /// generated from.
    pub fn calculate(schedule: &FullSchedule, config: &TimetableConfig) -> Self {
        let mut required_periods = 0u32;
        let mut allocated_periods = 0u32;
        let mut under_allocated = Vec::new();

        for subject in &config.subjects {
            let Some(grid) = schedule.schedule_for(&subject.class_section_id) else {
                continue;
            };
            let allocated = u32::try_from(grid.subject_total(&subject.id)).unwrap_or(u32::MAX);
            required_periods += subject.lectures_per_week;
            allocated_periods += allocated.min(subject.lectures_per_week);
            if allocated < subject.lectures_per_week {
                under_allocated.push((subject.id.clone(), allocated, subject.lectures_per_week));
            }
        }

        let mut load_by_faculty: HashMap<String, usize> = HashMap::new();
        for (_, _, _, cell) in schedule.bookings() {
            *load_by_faculty.entry(cell.faculty_id.clone()).or_insert(0) += 1;
        }

        let fill_rate = if required_periods == 0 {
            1.0
        } else {
            f64::from(allocated_periods) / f64::from(required_periods)
        };

        Self {
            required_periods,
            allocated_periods,
            fill_rate,
            slot_days_per_section: config.teaching_slot_days(),
            load_by_faculty,
            under_allocated,
        }
    }

    /// Largest minus smallest load among faculty who teach at all.
    pub fn load_spread(&self) -> usize {
        let max = self.load_by_faculty.values().max().copied().unwrap_or(0);
        let min = self.load_by_faculty.values().min().copied().unwrap_or(0);
        max - min
    }

    /// Whether the timetable meets the given fill-rate threshold.
    pub fn meets_fill_rate(&self, min_fill_rate: f64) -> bool {
        self.fill_rate >= min_fill_rate
    }
}
