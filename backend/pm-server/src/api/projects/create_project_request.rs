use crate::ApiResult;
use crate::api::validation::required_text;

use pm_config::ValidationConfig;

use serde::Deserialize;

/// Body of `POST /project`
#[derive(Debug, Deserialize)]
pub struct CreateProjectRequest {
    pub title: Option<String>,
    pub description: Option<String>,
}

/// A project request that passed validation.
#[derive(Debug, PartialEq, Eq)]
pub struct NewProject {
    pub title: String,
    pub description: String,
}

impl CreateProjectRequest {
    pub fn validate(self, limits: &ValidationConfig) -> ApiResult<NewProject> {
        Ok(NewProject {
            title: required_text("title", self.title, limits.max_title_length)?,
            description: required_text(
                "description",
                self.description,
                limits.max_description_length,
            )?,
        })
    }
}
