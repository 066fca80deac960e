//! Export-ready grid view of a timetable.
//!
//! Resolves ids to display names and lays each class-section out as a
//! table: one column per active day, one row per slot of the global
//! sequence. Writers (PDF, spreadsheet) consume this view directly.

use std::fmt;

use crate::models::{DayOfWeek, FullSchedule, TimetableConfig};

/// Display text for ids that no longer resolve.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// One rendered cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridEntry {
    /// Recess slot.
    Recess,
    /// Free period.
    Empty,
    /// Assigned period.
    Lecture { subject: String, faculty: String },
}

impl fmt::Display for GridEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridEntry::Recess => f.write_str("RECESS"),
            GridEntry::Empty => f.write_str("-"),
            GridEntry::Lecture { subject, faculty } => write!(f, "{subject} ({faculty})"),
        }
    }
}

/// One slot row: time label plus one entry per active day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridRow {
    /// "HH:MM - HH:MM".
    pub time: String,
    pub entries: Vec<GridEntry>,
}

/// Rendered grid of one class-section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionGrid {
    pub class_section_id: String,
    /// Class-section display name.
    pub title: String,
    /// Active days, in configuration order.
    pub days: Vec<DayOfWeek>,
    pub rows: Vec<GridRow>,
}

impl SectionGrid {
    /// Header row: "Time" followed by day names.
    pub fn header(&self) -> Vec<String> {
        std::iter::once("Time".to_string())
            .chain(self.days.iter().map(|d| d.to_string()))
            .collect()
    }

    /// All rows as display strings, header first.
    pub fn to_rows(&self) -> Vec<Vec<String>> {
        std::iter::once(self.header())
            .chain(self.rows.iter().map(|row| {
                std::iter::once(row.time.clone())
                    .chain(row.entries.iter().map(ToString::to_string))
                    .collect()
            }))
            .collect()
    }
}

/// Rendered grids for a whole timetable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimetableGrid {
    pub name: String,
    pub sections: Vec<SectionGrid>,
}

impl TimetableGrid {
    /// Renders every class-section grid whose class-section exists in the
    /// configuration; grids for unknown class-sections are skipped.
    pub fn build(schedule: &FullSchedule, config: &TimetableConfig) -> Self {
        let days: Vec<DayOfWeek> = config.active_days().map(|d| d.day).collect();

        let sections = schedule
            .schedules
            .iter()
            .filter_map(|grid| {
                let section = config.class_section(&grid.class_section_id)?;
                let rows = config
                    .global_slots
                    .iter()
                    .map(|slot| GridRow {
                        time: slot.time_range(),
                        entries: days
                            .iter()
                            .map(|&day| {
                                if slot.is_recess {
                                    return GridEntry::Recess;
                                }
                                match grid.cell(day, slot.index) {
                                    None => GridEntry::Empty,
                                    Some(cell) => GridEntry::Lecture {
                                        subject: config
                                            .subject(&cell.subject_id)
                                            .map_or(UNKNOWN_LABEL, |s| s.name.as_str())
                                            .to_string(),
                                        faculty: config
                                            .faculty(&cell.faculty_id)
                                            .map_or(UNKNOWN_LABEL, |f| f.name.as_str())
                                            .to_string(),
                                    },
                                }
                            })
                            .collect(),
                    })
                    .collect();
                Some(SectionGrid {
                    class_section_id: section.id.clone(),
                    title: section.name.clone(),
                    days: days.clone(),
                    rows,
                })
            })
            .collect();

        Self {
            name: schedule.name.clone(),
            sections,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ClassSection, Faculty, ScheduleCell, StandardSchedule, Subject};

    fn config() -> TimetableConfig {
        TimetableConfig::new()
            .with_class_section(ClassSection::new("c1", 10).with_division("A"))
            .with_subject(Subject::new("m", "Maths", "c1", 5))
            .with_faculty(Faculty::new("f1", "Asha"))
    }

    fn schedule() -> FullSchedule {
        let mut grid = StandardSchedule::new("c1");
        grid.day_mut(DayOfWeek::Monday)
            .set(0, ScheduleCell::new("m", "f1"));
        grid.day_mut(DayOfWeek::Tuesday)
            .set(1, ScheduleCell::new("gone", "f1"));
        FullSchedule::new(vec![grid, StandardSchedule::new("orphan")])
    }

    #[test]
    fn test_grid_layout() {
        let grid = TimetableGrid::build(&schedule(), &config());
        assert_eq!(grid.sections.len(), 1);
        let section = &grid.sections[0];
        assert_eq!(section.title, "Std 10-A");
        assert_eq!(section.days.len(), 5);
        assert_eq!(section.rows.len(), 6);
        assert_eq!(section.rows[0].time, "08:00 - 08:50");
    }

    #[test]
    fn test_entries() {
        let grid = TimetableGrid::build(&schedule(), &config());
        let rows = &grid.sections[0].rows;
        assert_eq!(
            rows[0].entries[0],
            GridEntry::Lecture {
                subject: "Maths".into(),
                faculty: "Asha".into()
            }
        );
        assert_eq!(rows[0].entries[1], GridEntry::Empty);
        assert!(rows[2].entries.iter().all(|e| *e == GridEntry::Recess));
        assert_eq!(rows[1].entries[1].to_string(), "Unknown (Asha)");
    }

    #[test]
    fn test_to_rows() {
        let grid = TimetableGrid::build(&schedule(), &config());
        let rows = grid.sections[0].to_rows();
        assert_eq!(rows[0][0], "Time");
        assert_eq!(rows[0][1], "Monday");
        assert_eq!(rows[1][1], "Maths (Asha)");
        assert_eq!(rows[1][2], "-");
        assert_eq!(rows[3][1], "RECESS");
    }
}
