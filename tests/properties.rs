//! Property tests: hard constraints hold for arbitrary configurations.

use std::collections::HashSet;

use proptest::prelude::*;
use u_timetable::models::{
    ClassSection, DayConfig, DayOfWeek, Faculty, FullSchedule, Subject, TimeSlot,
    TimetableConfig,
};
use u_timetable::scheduler::{GeneratorConfig, TimetableGenerator};

const SLOT_COUNT: usize = 7;

fn build_config(
    section_freqs: Vec<Vec<u32>>,
    faculty_specs: Vec<(u16, Vec<(usize, usize)>)>,
    lecture_counts: Vec<usize>,
    active: Vec<bool>,
    recess: usize,
) -> TimetableConfig {
    let slots = (0..SLOT_COUNT)
        .map(|i| {
            let slot = TimeSlot::new(format!("s{i}"), i, "08:00", "08:45");
            if i == recess {
                slot.as_recess()
            } else {
                slot
            }
        })
        .collect();
    let days = DayOfWeek::ALL
        .iter()
        .zip(lecture_counts.iter().zip(active.iter()))
        .map(|(&day, (&count, &is_active))| DayConfig {
            day,
            is_active,
            lecture_count: count,
        })
        .collect();

    let mut config = TimetableConfig::new().with_slots(slots).with_days(days);
    let mut subject_no = 0usize;
    for (section_no, freqs) in section_freqs.iter().enumerate() {
        let section_id = format!("c{section_no}");
        config = config.with_class_section(ClassSection::new(&section_id, 5));
        for &freq in freqs {
            config = config.with_subject(Subject::new(
                format!("sub{subject_no}"),
                format!("Subject {subject_no}"),
                &section_id,
                freq,
            ));
            subject_no += 1;
        }
    }

    let subjects = config.subjects.clone();
    for (faculty_no, (mask, unavailable)) in faculty_specs.into_iter().enumerate() {
        let mut faculty = Faculty::new(format!("f{faculty_no}"), format!("Teacher {faculty_no}"));
        let qualified = subjects
            .iter()
            .enumerate()
            .filter(|(k, _)| mask & (1 << (k % 16)) != 0)
            .map(|(_, s)| s.id.clone())
            .collect();
        faculty.set_subjects(qualified, &subjects);
        for (day_no, slot) in unavailable {
            faculty = faculty.with_unavailable(DayOfWeek::ALL[day_no], slot);
        }
        config = config.with_faculty(faculty);
    }
    config
}

fn arb_config() -> impl Strategy<Value = TimetableConfig> {
    (
        prop::collection::vec(prop::collection::vec(1u32..=7, 0..4), 1..=3),
        prop::collection::vec(
            (any::<u16>(), prop::collection::vec((0usize..6, 0usize..SLOT_COUNT), 0..4)),
            1..=4,
        ),
        prop::collection::vec(1usize..=SLOT_COUNT, 6),
        prop::collection::vec(any::<bool>(), 6),
        0usize..SLOT_COUNT,
    )
        .prop_map(|(freqs, faculty, counts, active, recess)| {
            build_config(freqs, faculty, counts, active, recess)
        })
}

fn generate(config: &TimetableConfig, seed: u64) -> (FullSchedule, usize) {
    let outcome = TimetableGenerator::with_config(GeneratorConfig::default().with_seed(seed))
        .generate(config);
    (outcome.schedule, outcome.shortfalls.len())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn no_faculty_double_booking(config in arb_config(), seed in any::<u64>()) {
        let (schedule, _) = generate(&config, seed);
        let mut seen = HashSet::new();
        for (_, day, slot, cell) in schedule.bookings() {
            prop_assert!(
                seen.insert((cell.faculty_id.clone(), day, slot)),
                "{} booked twice at {day} slot {slot}", cell.faculty_id
            );
        }
    }

    #[test]
    fn daily_cap_and_no_triple_block(config in arb_config(), seed in any::<u64>()) {
        let (schedule, _) = generate(&config, seed);
        for grid in &schedule.schedules {
            for daily in grid.days.values() {
                let cells: Vec<(usize, &str)> =
                    daily.iter().map(|(s, c)| (s, c.subject_id.as_str())).collect();
                for &(_, subject) in &cells {
                    prop_assert!(daily.subject_count(subject) <= 2);
                }
                for window in cells.windows(3) {
                    let consecutive = window[1].0 == window[0].0 + 1 && window[2].0 == window[1].0 + 1;
                    let same = window[0].1 == window[1].1 && window[1].1 == window[2].1;
                    prop_assert!(!(consecutive && same));
                }
            }
        }
    }

    #[test]
    fn raised_daily_cap_keeps_runs_short(config in arb_config(), seed in any::<u64>()) {
        let outcome = TimetableGenerator::with_config(
            GeneratorConfig::default().with_seed(seed).with_max_per_day(4),
        )
        .generate(&config);
        for grid in &outcome.schedule.schedules {
            for daily in grid.days.values() {
                let cells: Vec<(usize, &str)> =
                    daily.iter().map(|(s, c)| (s, c.subject_id.as_str())).collect();
                for window in cells.windows(3) {
                    let consecutive = window[1].0 == window[0].0 + 1 && window[2].0 == window[1].0 + 1;
                    let same = window[0].1 == window[1].1 && window[1].1 == window[2].1;
                    prop_assert!(!(consecutive && same));
                }
            }
        }
    }

    #[test]
    fn recess_and_day_length_respected(config in arb_config(), seed in any::<u64>()) {
        let (schedule, _) = generate(&config, seed);
        for (_, day, slot, _) in schedule.bookings() {
            let day_config = config.day_configs.iter().find(|d| d.day == day).unwrap();
            prop_assert!(day_config.is_active);
            prop_assert!(slot < day_config.lecture_count);
            prop_assert!(!config.global_slots[slot].is_recess);
        }
    }

    #[test]
    fn qualification_and_availability_respected(config in arb_config(), seed in any::<u64>()) {
        let (schedule, _) = generate(&config, seed);
        for (section_id, day, slot, cell) in schedule.bookings() {
            let faculty = config.faculty(&cell.faculty_id).unwrap();
            prop_assert!(faculty.is_qualified(&cell.subject_id, section_id));
            prop_assert!(!faculty.is_unavailable(day, slot));
            let subject = config.subject(&cell.subject_id).unwrap();
            prop_assert_eq!(&subject.class_section_id, section_id);
        }
    }

    #[test]
    fn structure_covers_every_section_and_active_day(config in arb_config(), seed in any::<u64>()) {
        let (schedule, _) = generate(&config, seed);
        prop_assert_eq!(schedule.schedules.len(), config.class_sections.len());
        let active: HashSet<DayOfWeek> = config.active_days().map(|d| d.day).collect();
        for section in &config.class_sections {
            let grid = schedule.schedule_for(&section.id).unwrap();
            let days: HashSet<DayOfWeek> = grid.days.keys().copied().collect();
            prop_assert_eq!(&days, &active);
        }
    }

    #[test]
    fn shortfalls_match_allocations(config in arb_config(), seed in any::<u64>()) {
        let outcome = TimetableGenerator::with_config(GeneratorConfig::default().with_seed(seed))
            .generate(&config);
        for subject in &config.subjects {
            let grid = outcome.schedule.schedule_for(&subject.class_section_id).unwrap();
            let placed = grid.subject_total(&subject.id) as u32;
            prop_assert!(placed <= subject.lectures_per_week);
            match outcome.shortfall_for(&subject.id) {
                Some(s) => prop_assert_eq!(s.allocated, placed),
                None => prop_assert_eq!(placed, subject.lectures_per_week),
            }
        }
    }

    #[test]
    fn seeded_generation_is_deterministic(config in arb_config(), seed in any::<u64>()) {
        let (a, shortfalls_a) = generate(&config, seed);
        let (b, shortfalls_b) = generate(&config, seed);
        prop_assert_eq!(a.schedules, b.schedules);
        prop_assert_eq!(shortfalls_a, shortfalls_b);
    }
}
