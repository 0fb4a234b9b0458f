use pm_core::{DayHours, Task};

use serde::Serialize;
use uuid::Uuid;

/// Task DTO for JSON serialization
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDto {
    pub title: String,
    pub hours_planned: u8,
    pub hours_wasted: u32,
    pub hours_wasted_per_day: Vec<DayHours>,
    pub id: Uuid,
}

impl From<Task> for TaskDto {
    fn from(t: Task) -> Self {
        Self {
            title: t.title,
            hours_planned: t.hours_planned,
            hours_wasted: t.hours_wasted,
            hours_wasted_per_day: t.hours_wasted_per_day,
            id: t.id,
        }
    }
}
