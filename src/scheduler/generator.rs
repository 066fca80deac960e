//! Greedy weekly timetable generator.
//!
//! # Algorithm
//!
//! 1. Create an empty grid per class-section, one entry per active day.
//! 2. For each class-section, sort its subjects by weekly frequency
//!    (descending, stable).
//! 3. For each subject, repeatedly search the best legal slot
//!    (see [`find_best_placement`]) and commit it, until the weekly
//!    frequency is met or `max_retries` searches have failed.
//! 4. Report every subject left short.
//!
//! Faculty occupancy is shared across class-sections within one call, so a
//! teacher is never placed in two classes at the same (day, slot).
//!
//! # Complexity
//! O(s * f * d * p * q) where s=subjects, f=weekly frequency, d=active days,
//! p=periods per day, q=qualified faculty per subject.

use std::fmt;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::TimetableError;
use crate::models::{DayOfWeek, Faculty, FullSchedule, Subject, TimeSlot, TimetableConfig};
use crate::validation::{config_warnings, validate_config};

use super::placement::{find_best_placement, PlacementRequest, PlacementRules};
use super::AllocationState;

/// Default number of failed searches tolerated per subject.
pub const DEFAULT_MAX_RETRIES: u32 = 50;

/// Default cap on periods of one subject per day.
pub const DEFAULT_MAX_PER_DAY: usize = 2;

/// Default upper bound of the tie-break jitter.
pub const DEFAULT_JITTER: f64 = 10.0;

/// Generator tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GeneratorConfig {
    /// Failed candidate searches tolerated per subject before giving up.
    pub max_retries: u32,
    /// Maximum periods of one subject per day per class-section.
    pub max_per_day: usize,
    /// Upper bound of the uniform tie-break term added to each score.
    ///
    /// Keep well below 100 so it never outweighs the heuristic bonuses.
    pub jitter: f64,
    /// Seed for the jitter source. `None` draws a fresh seed per call.
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            max_per_day: DEFAULT_MAX_PER_DAY,
            jitter: DEFAULT_JITTER,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    /// Sets the retry budget.
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Sets the daily cap.
    pub fn with_max_per_day(mut self, max_per_day: usize) -> Self {
        self.max_per_day = max_per_day;
        self
    }

    /// Sets the jitter magnitude.
    pub fn with_jitter(mut self, jitter: f64) -> Self {
        self.jitter = jitter;
        self
    }

    /// Fixes the random seed for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    fn rules(&self) -> PlacementRules {
        PlacementRules {
            max_per_day: self.max_per_day,
            jitter: self.jitter,
        }
    }
}

/// A subject that received fewer periods than required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationShortfall {
    pub subject_id: String,
    pub subject_name: String,
    pub class_section_id: String,
    pub allocated: u32,
    pub required: u32,
}

impl AllocationShortfall {
    /// Periods that could not be placed.
    pub fn missing(&self) -> u32 {
        self.required.saturating_sub(self.allocated)
    }
}

impl fmt::Display for AllocationShortfall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Could not fully allocate subject {} for standard {}. Allocated: {}/{}",
            self.subject_name, self.class_section_id, self.allocated, self.required
        )
    }
}

/// Result of one generation call.
#[derive(Debug, Clone)]
pub struct GenerationOutcome {
    /// The generated timetable (always complete in structure).
    pub schedule: FullSchedule,
    /// Subjects left under-allocated, in processing order.
    pub shortfalls: Vec<AllocationShortfall>,
    /// Seed used for the jitter source.
    pub seed: u64,
}

impl GenerationOutcome {
    /// Whether every subject received its full weekly frequency.
    pub fn is_complete(&self) -> bool {
        self.shortfalls.is_empty()
    }

    /// Shortfall for a subject, if any.
    pub fn shortfall_for(&self, subject_id: &str) -> Option<&AllocationShortfall> {
        self.shortfalls.iter().find(|s| s.subject_id == subject_id)
    }

    /// Discards the warnings.
    pub fn into_schedule(self) -> FullSchedule {
        self.schedule
    }
}

/// Progress of one subject through the placement loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SubjectProgress {
    /// More periods needed and retries left.
    Pending { allocated: u32, retries: u32 },
    /// Weekly frequency met.
    Complete { allocated: u32 },
    /// Retry budget spent before the frequency was met.
    Exhausted { allocated: u32 },
}

impl SubjectProgress {
    fn start(required: u32, max_retries: u32) -> Self {
        Self::advance(0, 0, required, max_retries)
    }

    fn advance(allocated: u32, retries: u32, required: u32, max_retries: u32) -> Self {
        if allocated >= required {
            SubjectProgress::Complete { allocated }
        } else if retries >= max_retries {
            SubjectProgress::Exhausted { allocated }
        } else {
            SubjectProgress::Pending { allocated, retries }
        }
    }
}

/// Greedy timetable generator.
///
/// Stateless between calls: each `generate` owns its grids, occupancy and
/// random source, so one generator can serve concurrent callers.
///
/// # Example
///
/// ```
/// use u_timetable::models::{ClassSection, Faculty, Subject, TimetableConfig};
/// use u_timetable::scheduler::{GeneratorConfig, TimetableGenerator};
///
/// let config = TimetableConfig::new()
///     .with_class_section(ClassSection::new("c10", 10))
///     .with_subject(Subject::new("math", "Mathematics", "c10", 4))
///     .with_faculty(Faculty::new("f1", "Asha").with_subject("math").with_class_section("c10"));
///
/// let generator = TimetableGenerator::with_config(GeneratorConfig::default().with_seed(1));
/// let outcome = generator.generate(&config);
/// assert!(outcome.is_complete());
/// assert_eq!(outcome.schedule.assignment_count(), 4);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TimetableGenerator {
    config: GeneratorConfig,
}

impl TimetableGenerator {
    /// Creates a generator with default tuning.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a generator with the given tuning.
    pub fn with_config(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Validates the configuration, then generates.
    ///
    /// Use this from application code; [`generate`](Self::generate) assumes
    /// the caller already checked referential integrity. Advisory issues
    /// (stale faculty references, days longer than the slot sequence) are
    /// logged and do not stop generation.
    pub fn generate_checked(
        &self,
        config: &TimetableConfig,
    ) -> Result<GenerationOutcome, TimetableError> {
        validate_config(config).map_err(TimetableError::InvalidConfig)?;
        for issue in config_warnings(config) {
            warn!(kind = ?issue.kind, "{}", issue.message);
        }
        Ok(self.generate(config))
    }

    /// Generates a timetable. Never fails; shortfalls are reported in the outcome.
    pub fn generate(&self, config: &TimetableConfig) -> GenerationOutcome {
        let seed = self.config.seed.unwrap_or_else(|| rand::rng().random());
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let (schedule, shortfalls) = self.generate_with_rng(config, &mut rng);
        GenerationOutcome {
            schedule,
            shortfalls,
            seed,
        }
    }

    /// Generates a timetable drawing jitter from a caller-supplied source.
    pub fn generate_with_rng<R: Rng + ?Sized>(
        &self,
        config: &TimetableConfig,
        rng: &mut R,
    ) -> (FullSchedule, Vec<AllocationShortfall>) {
        let rules = self.config.rules();
        let days: Vec<(DayOfWeek, &[TimeSlot])> = config
            .active_days()
            .map(|d| (d.day, d.applicable_slots(&config.global_slots)))
            .collect();

        let mut state = AllocationState::new(config);
        let mut shortfalls = Vec::new();

        for (section_idx, section) in config.class_sections.iter().enumerate() {
            let mut subjects: Vec<&Subject> = config.subjects_for(&section.id).collect();
            subjects.sort_by(|a, b| b.lectures_per_week.cmp(&a.lectures_per_week));

            for subject in subjects {
                let qualified: Vec<&Faculty> = config
                    .faculties
                    .iter()
                    .filter(|f| f.is_qualified(&subject.id, &section.id))
                    .collect();
                let request = PlacementRequest {
                    subject,
                    qualified: &qualified,
                    days: &days,
                };

                let allocated =
                    self.allocate_subject(&request, &rules, &mut state, section_idx, rng);
                if allocated < subject.lectures_per_week {
                    let shortfall = AllocationShortfall {
                        subject_id: subject.id.clone(),
                        subject_name: subject.name.clone(),
                        class_section_id: section.id.clone(),
                        allocated,
                        required: subject.lectures_per_week,
                    };
                    warn!(
                        subject = %subject.name,
                        class_section = %section.id,
                        allocated,
                        required = subject.lectures_per_week,
                        "{shortfall}"
                    );
                    shortfalls.push(shortfall);
                }
            }
        }

        let schedule = FullSchedule::new(state.into_grids());
        info!(
            schedule_id = %schedule.id,
            class_sections = schedule.schedules.len(),
            periods = schedule.assignment_count(),
            shortfalls = shortfalls.len(),
            "timetable generated"
        );
        (schedule, shortfalls)
    }

    /// Places periods of one subject until complete or out of retries.
    ///
    /// Returns the number of periods placed.
    fn allocate_subject<R: Rng + ?Sized>(
        &self,
        request: &PlacementRequest<'_, '_>,
        rules: &PlacementRules,
        state: &mut AllocationState,
        section_idx: usize,
        rng: &mut R,
    ) -> u32 {
        let subject = request.subject;
        let required = subject.lectures_per_week;
        let max_retries = self.config.max_retries;
        let mut progress = SubjectProgress::start(required, max_retries);

        loop {
            progress = match progress {
                SubjectProgress::Pending { allocated, retries } => {
                    let found = find_best_placement(
                        request,
                        rules,
                        state.grid(section_idx),
                        state.occupancy(),
                        rng,
                    );
                    match found {
                        Some(placement) => {
                            debug!(
                                subject = %subject.id,
                                day = %placement.day,
                                slot = placement.slot_index,
                                faculty = %placement.faculty.id,
                                score = placement.score,
                                "period placed"
                            );
                            state.commit(section_idx, &subject.id, &placement);
                            SubjectProgress::advance(allocated + 1, retries, required, max_retries)
                        }
                        None => {
                            SubjectProgress::advance(allocated, retries + 1, required, max_retries)
                        }
                    }
                }
                SubjectProgress::Complete { allocated } | SubjectProgress::Exhausted { allocated } => {
                    return allocated;
                }
            };
        }
    }
}
