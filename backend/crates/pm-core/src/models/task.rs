//! Task entity - planned work inside a sprint with per-day wasted hours.

use crate::{CoreError, CoreResult, DayHours, Sprint, init_hours_per_day};

use std::panic::Location;

use chrono::{DateTime, NaiveDate, Utc};
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    pub hours_planned: u8,
    /// Sum of `hours_wasted_per_day`
    pub hours_wasted: u32,
    /// One record per sprint day, chronological
    pub hours_wasted_per_day: Vec<DayHours>,
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Create a task covering every day of `sprint` with nothing wasted yet.
    #[track_caller]
    pub fn new(title: String, hours_planned: u8, sprint: &Sprint) -> CoreResult<Self> {
        let hours_wasted_per_day = init_hours_per_day(sprint.start_date, sprint.duration)?;

        Ok(Self {
            id: Uuid::new_v4(),
            title,
            hours_planned,
            hours_wasted: 0,
            hours_wasted_per_day,
            created_at: Utc::now(),
        })
    }

    /// Overwrite the wasted hours for `day` and recompute the total.
    #[track_caller]
    pub fn record_hours(&mut self, day: NaiveDate, hours: u8) -> CoreResult<DayHours> {
        let entry = self
            .hours_wasted_per_day
            .iter_mut()
            .find(|d| d.current_day == day)
            .ok_or_else(|| CoreError::DayNotInSprint {
                day,
                location: ErrorLocation::from(Location::caller()),
            })?;
        entry.single_hours_wasted = hours;
        let updated = *entry;

        self.hours_wasted = self.total_wasted();

        Ok(updated)
    }

    pub fn total_wasted(&self) -> u32 {
        self.hours_wasted_per_day
            .iter()
            .map(|d| u32::from(d.single_hours_wasted))
            .sum()
    }

    /// Case-insensitive title match used by task search.
    pub fn title_matches(&self, search: &str) -> bool {
        self.title.to_lowercase().contains(&search.to_lowercase())
    }
}
