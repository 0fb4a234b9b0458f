use pm_core::Sprint;

use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

/// Created sprint with its derived start date
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SprintResponse {
    pub title: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub duration: u32,
    pub id: Uuid,
}

impl From<Sprint> for SprintResponse {
    fn from(s: Sprint) -> Self {
        Self {
            title: s.title,
            start_date: s.start_date,
            end_date: s.end_date,
            duration: s.duration,
            id: s.id,
        }
    }
}
