use crate::ApiResult;
use crate::api::validation::{bounded, lenient_date};

use pm_core::{MAX_HOURS_PER_DAY, MIN_HOURS_PER_DAY};

use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::Value;

/// Body of `PATCH /task/{taskId}`
#[derive(Debug, Deserialize)]
pub struct UpdateTaskHoursRequest {
    /// `YYYY-MM-DD`; month and day may be unpadded
    pub date: Option<String>,
    pub hours: Option<Value>,
}

#[derive(Debug, PartialEq, Eq)]
pub struct HoursChange {
    pub day: NaiveDate,
    pub hours: u8,
}

impl UpdateTaskHoursRequest {
    pub fn validate(self) -> ApiResult<HoursChange> {
        Ok(HoursChange {
            day: lenient_date("date", self.date)?,
            hours: bounded(
                "hours",
                self.hours,
                i64::from(MIN_HOURS_PER_DAY),
                i64::from(MAX_HOURS_PER_DAY),
            )?,
        })
    }
}
