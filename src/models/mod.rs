//! Timetabling domain models.
//!
//! Provides the input configuration (class-sections, subjects, faculty,
//! the weekly slot grid) and the generated timetable.
//!
//! # Domain Mappings
//!
//! | u-timetable | School | Generic scheduling |
//! |-------------|--------|--------------------|
//! | ClassSection | Standard / Division | Resource owning a calendar |
//! | Subject | Course for one class | Task with a weekly quota |
//! | Faculty | Teacher | Shared resource |
//! | TimeSlot | Period | Discrete time bucket |
//! | FullSchedule | Timetable version | Schedule |

mod class_section;
mod config;
mod faculty;
mod schedule;
mod subject;
mod timing;

pub use class_section::{ClassSection, Medium, Stream};
pub use config::TimetableConfig;
pub use faculty::{Faculty, Unavailability};
pub use schedule::{DailySchedule, FullSchedule, ScheduleCell, StandardSchedule, DEFAULT_SCHEDULE_NAME};
pub use subject::Subject;
pub use timing::{default_days, default_slots, DayConfig, DayOfWeek, TimeSlot};
