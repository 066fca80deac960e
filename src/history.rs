//! Version history of generated timetables.
//!
//! Generated timetables are kept newest-first. Exactly one may be active;
//! recording a new version makes it active, and removing the active one
//! falls back to the newest remaining version.

use serde::{Deserialize, Serialize};

use crate::error::TimetableError;
use crate::models::FullSchedule;

/// Saved timetables plus the active selection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleHistory {
    /// Saved versions, newest first.
    saved: Vec<FullSchedule>,
    /// Id of the active version.
    active_id: Option<String>,
}

impl ScheduleHistory {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Name the next recorded version will receive ("Version N").
    pub fn next_version_name(&self) -> String {
        format!("Version {}", self.saved.len() + 1)
    }

    /// Names the schedule as the next version, stores it newest-first and
    /// makes it active. Returns the stored schedule.
    pub fn record(&mut self, mut schedule: FullSchedule) -> &FullSchedule {
        schedule.rename(self.next_version_name());
        self.active_id = Some(schedule.id.clone());
        self.saved.insert(0, schedule);
        &self.saved[0]
    }

    /// Saved versions, newest first.
    pub fn versions(&self) -> &[FullSchedule] {
        &self.saved
    }

    pub fn len(&self) -> usize {
        self.saved.len()
    }

    pub fn is_empty(&self) -> bool {
        self.saved.is_empty()
    }

    /// Looks up a version by id.
    pub fn get(&self, id: &str) -> Option<&FullSchedule> {
        self.saved.iter().find(|s| s.id == id)
    }

    /// Mutable access to a version, e.g. for manual cell edits.
    pub fn get_mut(&mut self, id: &str) -> Option<&mut FullSchedule> {
        self.saved.iter_mut().find(|s| s.id == id)
    }

    /// The active version.
    pub fn active(&self) -> Option<&FullSchedule> {
        self.active_id.as_deref().and_then(|id| self.get(id))
    }

    /// Makes a version active.
    pub fn select(&mut self, id: &str) -> Result<&FullSchedule, TimetableError> {
        let position = self.position(id)?;
        self.active_id = Some(id.to_string());
        Ok(&self.saved[position])
    }

    /// Renames a version.
    pub fn rename(&mut self, id: &str, name: impl Into<String>) -> Result<(), TimetableError> {
        let position = self.position(id)?;
        self.saved[position].rename(name);
        Ok(())
    }

    /// Removes a version. If it was active, the newest remaining version
    /// becomes active (or none, if the history is now empty).
    pub fn remove(&mut self, id: &str) -> Result<FullSchedule, TimetableError> {
        let position = self.position(id)?;
        let removed = self.saved.remove(position);
        if self.active_id.as_deref() == Some(id) {
            self.active_id = self.saved.first().map(|s| s.id.clone());
        }
        Ok(removed)
    }

    fn position(&self, id: &str) -> Result<usize, TimetableError> {
        self.saved
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| TimetableError::UnknownSchedule(id.to_string()))
    }
}
