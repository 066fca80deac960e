//! Global faculty occupancy for one generation call.
//!
//! Tracks which (day, slot-index) pairs each faculty member is already
//! teaching, across every class-section. Owned by a single
//! `AllocationState` and discarded when generation returns.

use std::collections::{HashMap, HashSet};

use crate::models::DayOfWeek;

/// Faculty bookings: faculty id → set of (day, slot-index).
#[derive(Debug, Clone, Default)]
pub struct FacultyOccupancy {
    booked: HashMap<String, HashSet<(DayOfWeek, usize)>>,
}

impl FacultyOccupancy {
    /// Creates an empty occupancy map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the faculty already teaches somewhere at (day, slot-index).
    #[inline]
    pub fn is_booked(&self, faculty_id: &str, day: DayOfWeek, slot_index: usize) -> bool {
        self.booked
            .get(faculty_id)
            .is_some_and(|slots| slots.contains(&(day, slot_index)))
    }

    /// Books the faculty at (day, slot-index).
    ///
    /// Returns `false` if the faculty was already booked there.
    pub fn book(&mut self, faculty_id: &str, day: DayOfWeek, slot_index: usize) -> bool {
        self.booked
            .entry(faculty_id.to_string())
            .or_default()
            .insert((day, slot_index))
    }

    /// Number of bookings held by one faculty member.
    pub fn load(&self, faculty_id: &str) -> usize {
        self.booked.get(faculty_id).map_or(0, HashSet::len)
    }

    /// Total bookings across all faculty.
    pub fn len(&self) -> usize {
        self.booked.values().map(HashSet::len).sum()
    }

    /// Whether nothing is booked.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_and_query() {
        let mut occ = FacultyOccupancy::new();
        assert!(!occ.is_booked("f1", DayOfWeek::Monday, 0));
        assert!(occ.book("f1", DayOfWeek::Monday, 0));
        assert!(occ.is_booked("f1", DayOfWeek::Monday, 0));
        assert!(!occ.is_booked("f1", DayOfWeek::Tuesday, 0));
        assert!(!occ.is_booked("f2", DayOfWeek::Monday, 0));
    }

    #[test]
    fn test_double_booking_rejected() {
        let mut occ = FacultyOccupancy::new();
        assert!(occ.book("f1", DayOfWeek::Friday, 3));
        assert!(!occ.book("f1", DayOfWeek::Friday, 3));
        assert_eq!(occ.load("f1"), 1);
    }

    #[test]
    fn test_counts() {
        let mut occ = FacultyOccupancy::new();
        assert!(occ.is_empty());
        occ.book("f1", DayOfWeek::Monday, 0);
        occ.book("f1", DayOfWeek::Monday, 1);
        occ.book("f2", DayOfWeek::Monday, 0);
        assert_eq!(occ.len(), 3);
        assert_eq!(occ.load("f1"), 2);
        assert_eq!(occ.load("f3"), 0);
    }
}
