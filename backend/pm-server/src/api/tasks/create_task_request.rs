use crate::ApiResult;
use crate::api::validation::{bounded, required_text};

use pm_config::ValidationConfig;
use pm_core::{MAX_HOURS_PLANNED, MIN_HOURS_PLANNED};

use serde::Deserialize;
use serde_json::Value;

/// Body of `POST /task/{sprintId}`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    pub title: Option<String>,
    pub hours_planned: Option<Value>,
}

#[derive(Debug, PartialEq, Eq)]
pub struct NewTask {
    pub title: String,
    pub hours_planned: u8,
}

impl CreateTaskRequest {
    pub fn validate(self, limits: &ValidationConfig) -> ApiResult<NewTask> {
        Ok(NewTask {
            title: required_text("title", self.title, limits.max_title_length)?,
            hours_planned: bounded(
                "hoursPlanned",
                self.hours_planned,
                i64::from(MIN_HOURS_PLANNED),
                i64::from(MAX_HOURS_PLANNED),
            )?,
        })
    }
}
