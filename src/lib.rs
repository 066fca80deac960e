//! School timetable generation.
//!
//! Assigns subjects and teachers to weekly periods across many
//! class-sections. A teacher booked in one class-section is unavailable to
//! every other class-section at the same (day, slot).
//!
//! # Modules
//!
//! - **`models`**: Domain types — `ClassSection`, `Subject`, `Faculty`,
//!   `TimeSlot`, `DayConfig`, `TimetableConfig`, `FullSchedule`
//! - **`scheduler`**: Greedy allocator (`TimetableGenerator`) and
//!   `CoverageReport`
//! - **`validation`**: Pre-generation checks, fatal (duplicate IDs, dangling
//!   references, empty subject list)
//! - **`history`**: Versioned timetables with one active selection
//! - **`render`**: Export-ready grids with display names
//!
//! # Architecture
//!
//! The allocator is a pure, synchronous computation: configuration in,
//! timetable plus shortfall warnings out. Persistence, UI and file export
//! live in the surrounding application.
//!
//! # References
//!
//! - Schaerf (1999), "A Survey of Automated Timetabling"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4

pub mod error;
pub mod history;
pub mod models;
pub mod render;
pub mod scheduler;
pub mod validation;

pub use error::TimetableError;
