//! Greedy timetable allocation and coverage evaluation.
//!
//! # Algorithm
//!
//! `TimetableGenerator` fills each class-section's weekly grid subject by
//! subject, highest weekly frequency first. Each period is placed at the
//! best-scoring legal slot; a teacher booked anywhere at a (day, slot) is
//! unavailable to every other class-section at that (day, slot). It is not
//! optimal and never backtracks: subjects that cannot be fully placed within
//! the retry budget are reported, not rejected.
//!
//! # Coverage
//!
//! `CoverageReport` computes fill rate and per-teacher load.
//!
//! # References
//!
//! - Schaerf (1999), "A Survey of Automated Timetabling"
//! - Burke & Petrovic (2002), "Recent research directions in automated timetabling"

mod coverage;
mod generator;
mod occupancy;
pub mod placement;
mod state;

pub use coverage::CoverageReport;
pub use generator::{
    AllocationShortfall, GenerationOutcome, GeneratorConfig, TimetableGenerator,
    DEFAULT_JITTER, DEFAULT_MAX_PER_DAY, DEFAULT_MAX_RETRIES,
};
pub use occupancy::FacultyOccupancy;
pub use state::AllocationState;
