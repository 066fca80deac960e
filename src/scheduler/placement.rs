//! Candidate search and scoring for a single period placement.
//!
//! # Algorithm
//!
//! For one subject of one class-section, every active day and every
//! applicable, non-recess, free slot is examined. A slot is rejected if it
//! would break a hard constraint:
//!
//! - the subject already has `max_per_day` periods that day,
//! - the slot would complete a run of three consecutive periods of the
//!   subject (on either side of an existing pair, or inside a gap),
//! - no qualified faculty member is free at that (day, slot).
//!
//! Surviving slots are scored and the highest score wins:
//!
//! | Term | Score |
//! |------|-------|
//! | Tie-break jitter | uniform in `[0, jitter)` |
//! | Previous slot holds the subject | +1000 |
//! | Next slot holds the subject | +1000 |
//! | First period of the subject that day | +100 |
//!
//! The search reads the grid and occupancy but never mutates them; the
//! caller commits the returned placement.

use rand::Rng;

use crate::models::{DailySchedule, DayOfWeek, Faculty, StandardSchedule, Subject, TimeSlot};

use super::FacultyOccupancy;

/// Bonus for a slot adjacent to an existing period of the same subject.
pub const ADJACENT_BONUS: f64 = 1000.0;

/// Bonus for the first period of a subject on a day.
pub const FIRST_OF_DAY_BONUS: f64 = 100.0;

/// Hard limits and scoring parameters for candidate search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementRules {
    /// Maximum periods of one subject per day per class-section.
    pub max_per_day: usize,
    /// Upper bound of the uniform tie-break term.
    pub jitter: f64,
}

/// A scored candidate (day, slot-index, faculty).
#[derive(Debug, Clone, Copy)]
pub struct Placement<'a> {
    pub day: DayOfWeek,
    pub slot_index: usize,
    pub faculty: &'a Faculty,
    pub score: f64,
}

/// Everything the search needs to know about the period being placed.
#[derive(Debug, Clone, Copy)]
pub struct PlacementRequest<'a, 'f> {
    pub subject: &'a Subject,
    /// Faculty qualified for the subject and class-section, in input order.
    pub qualified: &'a [&'f Faculty],
    /// Active days with their applicable slot prefixes.
    pub days: &'a [(DayOfWeek, &'a [TimeSlot])],
}

/// Finds the best placement for one period, or `None` if no slot is legal.
pub fn find_best_placement<'f, R: Rng + ?Sized>(
    request: &PlacementRequest<'_, 'f>,
    rules: &PlacementRules,
    grid: &StandardSchedule,
    occupancy: &FacultyOccupancy,
    rng: &mut R,
) -> Option<Placement<'f>> {
    let subject_id = request.subject.id.as_str();
    let empty = DailySchedule::new();
    let mut best: Option<Placement<'f>> = None;

    for &(day, slots) in request.days {
        let daily = grid.day(day).unwrap_or(&empty);
        let on_day = daily.subject_count(subject_id);
        if on_day >= rules.max_per_day {
            continue;
        }

        for slot in slots {
            if slot.is_recess || daily.is_occupied(slot.index) {
                continue;
            }
            if breaks_consecutive_limit(daily, slot.index, subject_id) {
                continue;
            }
            let Some(faculty) = first_free_faculty(request.qualified, occupancy, day, slot.index)
            else {
                continue;
            };

            let score = jitter(rules.jitter, rng)
                + heuristic_score(daily, slot.index, subject_id, on_day);
            // Strictly greater: exact ties keep the first candidate found.
            if best.map_or(true, |b| score > b.score) {
                best = Some(Placement {
                    day,
                    slot_index: slot.index,
                    faculty,
                    score,
                });
            }
        }
    }

    best
}

/// Whether placing the subject at `slot_index` would form three in a row.
///
/// Rejects `[S, S, here]`, `[S, here, S]` and `[here, S, S]`.
pub fn breaks_consecutive_limit(
    daily: &DailySchedule,
    slot_index: usize,
    subject_id: &str,
) -> bool {
    let before = (1..=2)
        .take_while(|&offset| holds_before(daily, slot_index, offset, subject_id))
        .count();
    let after = (1..=2)
        .take_while(|&offset| holds_after(daily, slot_index, offset, subject_id))
        .count();
    before + after >= 2
}

/// Deterministic part of the score.
pub fn heuristic_score(
    daily: &DailySchedule,
    slot_index: usize,
    subject_id: &str,
    on_day: usize,
) -> f64 {
    let mut score = 0.0;
    if holds_before(daily, slot_index, 1, subject_id) {
        score += ADJACENT_BONUS;
    }
    if holds_after(daily, slot_index, 1, subject_id) {
        score += ADJACENT_BONUS;
    }
    if on_day == 0 {
        score += FIRST_OF_DAY_BONUS;
    }
    score
}

/// First qualified faculty that is neither personally unavailable nor
/// already teaching at (day, slot-index). No load balancing.
fn first_free_faculty<'f>(
    qualified: &[&'f Faculty],
    occupancy: &FacultyOccupancy,
    day: DayOfWeek,
    slot_index: usize,
) -> Option<&'f Faculty> {
    qualified
        .iter()
        .copied()
        .find(|f| {
            !f.is_unavailable(day, slot_index) && !occupancy.is_booked(&f.id, day, slot_index)
        })
}

fn holds_before(daily: &DailySchedule, slot_index: usize, offset: usize, subject_id: &str) -> bool {
    slot_index
        .checked_sub(offset)
        .is_some_and(|i| daily.holds_subject(i, subject_id))
}

fn holds_after(daily: &DailySchedule, slot_index: usize, offset: usize, subject_id: &str) -> bool {
    slot_index
        .checked_add(offset)
        .is_some_and(|i| daily.holds_subject(i, subject_id))
}

fn jitter<R: Rng + ?Sized>(magnitude: f64, rng: &mut R) -> f64 {
    if magnitude.is_finite() && magnitude > 0.0 {
        rng.random_range(0.0..magnitude)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{default_slots, ScheduleCell};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const RULES: PlacementRules = PlacementRules {
        max_per_day: 2,
        jitter: 0.0,
    };

    fn day_with(cells: &[(usize, &str)]) -> DailySchedule {
        let mut daily = DailySchedule::new();
        for &(slot, subject) in cells {
            daily.set(slot, ScheduleCell::new(subject, "fx"));
        }
        daily
    }

    fn grid_with(day: DayOfWeek, cells: &[(usize, &str)]) -> StandardSchedule {
        let mut grid = StandardSchedule::new("c1");
        *grid.day_mut(day) = day_with(cells);
        grid
    }

    #[test]
    fn test_triple_block_rejected() {
        let daily = day_with(&[(0, "m"), (1, "m")]);
        assert!(breaks_consecutive_limit(&daily, 2, "m"));
        assert!(!breaks_consecutive_limit(&daily, 2, "s"));
        assert!(!breaks_consecutive_limit(&daily, 3, "m"));
    }

    #[test]
    fn test_sandwich_rejected() {
        let daily = day_with(&[(3, "m"), (5, "m")]);
        assert!(breaks_consecutive_limit(&daily, 4, "m"));
        // Only one neighbour
        let daily = day_with(&[(3, "m")]);
        assert!(!breaks_consecutive_limit(&daily, 4, "m"));
        assert!(!breaks_consecutive_limit(&daily, 2, "m"));
    }

    #[test]
    fn test_slot_zero_has_no_predecessor() {
        let daily = day_with(&[(1, "m")]);
        assert!(!breaks_consecutive_limit(&daily, 0, "m"));
        assert_eq!(heuristic_score(&daily, 0, "m", 1), ADJACENT_BONUS);
    }

    #[test]
    fn test_heuristic_score_terms() {
        let empty = DailySchedule::new();
        assert_eq!(heuristic_score(&empty, 3, "m", 0), FIRST_OF_DAY_BONUS);

        let daily = day_with(&[(3, "m")]);
        assert_eq!(heuristic_score(&daily, 4, "m", 1), ADJACENT_BONUS);
        assert_eq!(heuristic_score(&daily, 0, "m", 1), 0.0);
    }

    #[test]
    fn test_prefers_double_period() {
        let slots = default_slots();
        let faculty = Faculty::new("f1", "Asha");
        let qualified = [&faculty];
        let subject = Subject::new("m", "Maths", "c1", 4);
        let days = [(DayOfWeek::Monday, &slots[..]), (DayOfWeek::Tuesday, &slots[..])];
        let request = PlacementRequest {
            subject: &subject,
            qualified: &qualified,
            days: &days,
        };
        let grid = grid_with(DayOfWeek::Monday, &[(3, "m")]);
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        let best = find_best_placement(&request, &RULES, &grid, &FacultyOccupancy::new(), &mut rng)
            .unwrap();
        // Adjacent (+1000) beats a fresh day (+100)
        assert_eq!(best.day, DayOfWeek::Monday);
        assert_eq!(best.slot_index, 4);
        assert_eq!(best.score, ADJACENT_BONUS);
    }

    #[test]
    fn test_daily_cap_skips_day() {
        let slots = default_slots();
        let faculty = Faculty::new("f1", "Asha");
        let qualified = [&faculty];
        let subject = Subject::new("m", "Maths", "c1", 4);
        let days = [(DayOfWeek::Monday, &slots[..])];
        let request = PlacementRequest {
            subject: &subject,
            qualified: &qualified,
            days: &days,
        };
        let grid = grid_with(DayOfWeek::Monday, &[(0, "m"), (4, "m")]);
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        assert!(
            find_best_placement(&request, &RULES, &grid, &FacultyOccupancy::new(), &mut rng)
                .is_none()
        );
    }

    #[test]
    fn test_faculty_constraints() {
        let slots = default_slots();
        let busy = Faculty::new("f1", "Busy").with_unavailable(DayOfWeek::Monday, 0);
        let backup = Faculty::new("f2", "Backup");
        let qualified = [&busy, &backup];
        let subject = Subject::new("m", "Maths", "c1", 1);
        let days = [(DayOfWeek::Monday, &slots[..1])];
        let request = PlacementRequest {
            subject: &subject,
            qualified: &qualified,
            days: &days,
        };
        let grid = StandardSchedule::new("c1");
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let best =
            find_best_placement(&request, &RULES, &grid, &FacultyOccupancy::new(), &mut rng).unwrap();
        assert_eq!(best.faculty.id, "f2");

        let mut occupancy = FacultyOccupancy::new();
        occupancy.book("f2", DayOfWeek::Monday, 0);
        assert!(find_best_placement(&request, &RULES, &grid, &occupancy, &mut rng).is_none());
    }

    #[test]
    fn test_first_match_faculty_without_balancing() {
        let slots = default_slots();
        let first = Faculty::new("f1", "First");
        let second = Faculty::new("f2", "Second");
        let qualified = [&first, &second];
        let subject = Subject::new("m", "Maths", "c1", 1);
        let days = [(DayOfWeek::Monday, &slots[..])];
        let request = PlacementRequest {
            subject: &subject,
            qualified: &qualified,
            days: &days,
        };
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let best = find_best_placement(
            &request,
            &RULES,
            &StandardSchedule::new("c1"),
            &FacultyOccupancy::new(),
            &mut rng,
        )
        .unwrap();
        assert_eq!(best.faculty.id, "f1");
    }

    #[test]
    fn test_exact_tie_keeps_first_candidate() {
        let slots = default_slots();
        let faculty = Faculty::new("f1", "Asha");
        let qualified = [&faculty];
        let subject = Subject::new("m", "Maths", "c1", 1);
        let days = [(DayOfWeek::Monday, &slots[..]), (DayOfWeek::Tuesday, &slots[..])];
        let request = PlacementRequest {
            subject: &subject,
            qualified: &qualified,
            days: &days,
        };
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let best = find_best_placement(
            &request,
            &RULES,
            &StandardSchedule::new("c1"),
            &FacultyOccupancy::new(),
            &mut rng,
        )
        .unwrap();
        assert_eq!((best.day, best.slot_index), (DayOfWeek::Monday, 0));
    }

    #[test]
    fn test_jitter_stays_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..100 {
            let j = jitter(10.0, &mut rng);
            assert!((0.0..10.0).contains(&j));
        }
        assert_eq!(jitter(0.0, &mut rng), 0.0);
        assert_eq!(jitter(f64::INFINITY, &mut rng), 0.0);
        assert_eq!(jitter(f64::NAN, &mut rng), 0.0);
        assert_eq!(jitter(-5.0, &mut rng), 0.0);
    }

    #[test]
    fn test_leading_pair_rejected() {
        let daily = day_with(&[(3, "m"), (4, "m")]);
        assert!(breaks_consecutive_limit(&daily, 2, "m"));
        assert!(!breaks_consecutive_limit(&daily, 1, "m"));
        assert!(!breaks_consecutive_limit(&daily, 2, "s"));
    }

    #[test]
    fn test_last_representable_slot() {
        let daily = day_with(&[(usize::MAX - 1, "m")]);
        assert!(!breaks_consecutive_limit(&daily, usize::MAX, "m"));
        assert_eq!(heuristic_score(&daily, usize::MAX, "m", 1), ADJACENT_BONUS);

        let daily = day_with(&[(usize::MAX - 2, "m"), (usize::MAX - 1, "m")]);
        assert!(breaks_consecutive_limit(&daily, usize::MAX, "m"));
    }
}
