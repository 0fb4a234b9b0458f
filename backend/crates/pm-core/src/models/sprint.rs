use crate::{CoreResult, derive_start_date};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprint {
    pub id: Uuid,
    pub project_id: Uuid,

    pub title: String,

    /// Always `end_date - (duration - 1)` days
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub duration: u32,

    /// Tasks in the order they were added
    pub tasks: Vec<Uuid>,

    pub created_at: DateTime<Utc>,
}

impl Sprint {
    /// Build a sprint ending on `end_date`; the start date is derived.
    #[track_caller]
    pub fn new(
        project_id: Uuid,
        title: String,
        end_date: NaiveDate,
        duration: u32,
    ) -> CoreResult<Self> {
        let start_date = derive_start_date(end_date, duration)?;

        Ok(Self {
            id: Uuid::new_v4(),
            project_id,
            title,
            start_date,
            end_date,
            duration,
            tasks: Vec::new(),
            created_at: Utc::now(),
        })
    }
}
