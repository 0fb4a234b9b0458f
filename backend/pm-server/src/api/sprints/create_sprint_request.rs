use crate::ApiResult;
use crate::api::validation::{bounded, required_text, strict_date};

use pm_config::ValidationConfig;
use pm_core::MIN_SPRINT_DURATION;

use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::Value;

/// Body of `POST /sprint/{projectId}`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSprintRequest {
    pub title: Option<String>,
    /// Zero-padded `YYYY-MM-DD`
    pub end_date: Option<String>,
    pub duration: Option<Value>,
}

#[derive(Debug, PartialEq, Eq)]
pub struct NewSprint {
    pub title: String,
    pub end_date: NaiveDate,
    pub duration: u32,
}

impl CreateSprintRequest {
    pub fn validate(self, limits: &ValidationConfig) -> ApiResult<NewSprint> {
        Ok(NewSprint {
            title: required_text("title", self.title, limits.max_title_length)?,
            end_date: strict_date("endDate", self.end_date)?,
            duration: bounded(
                "duration",
                self.duration,
                i64::from(MIN_SPRINT_DURATION),
                i64::from(limits.max_sprint_duration),
            )?,
        })
    }
}
