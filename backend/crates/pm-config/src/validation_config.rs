use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

pub const MIN_TITLE_LENGTH: usize = 1;
pub const MAX_TITLE_LENGTH: usize = 500;
pub const DEFAULT_MAX_TITLE_LENGTH: usize = 200;

pub const MIN_DESCRIPTION_LENGTH: usize = 1;
pub const MAX_DESCRIPTION_LENGTH: usize = 100000;
pub const DEFAULT_MAX_DESCRIPTION_LENGTH: usize = 10000;

pub const MIN_SPRINT_DURATION: u32 = 1;
pub const MAX_SPRINT_DURATION: u32 = 3660;
pub const DEFAULT_MAX_SPRINT_DURATION: u32 = 366;

/// Request field limits applied before any domain logic runs.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Maximum length for project, sprint and task titles
    pub max_title_length: usize,
    /// Maximum length for project descriptions
    pub max_description_length: usize,
    /// Longest sprint, in days. Every task stores one row per sprint day.
    pub max_sprint_duration: u32,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_title_length: DEFAULT_MAX_TITLE_LENGTH,
            max_description_length: DEFAULT_MAX_DESCRIPTION_LENGTH,
            max_sprint_duration: DEFAULT_MAX_SPRINT_DURATION,
        }
    }
}

impl ValidationConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(MIN_TITLE_LENGTH..=MAX_TITLE_LENGTH).contains(&self.max_title_length) {
            return Err(ConfigError::config(format!(
                "validation.max_title_length must be {}-{}, got {}",
                MIN_TITLE_LENGTH, MAX_TITLE_LENGTH, self.max_title_length
            )));
        }

        if !(MIN_DESCRIPTION_LENGTH..=MAX_DESCRIPTION_LENGTH).contains(&self.max_description_length)
        {
            return Err(ConfigError::config(format!(
                "validation.max_description_length must be {}-{}, got {}",
                MIN_DESCRIPTION_LENGTH, MAX_DESCRIPTION_LENGTH, self.max_description_length
            )));
        }

        if !(MIN_SPRINT_DURATION..=MAX_SPRINT_DURATION).contains(&self.max_sprint_duration) {
            return Err(ConfigError::config(format!(
                "validation.max_sprint_duration must be {}-{}, got {}",
                MIN_SPRINT_DURATION, MAX_SPRINT_DURATION, self.max_sprint_duration
            )));
        }

        Ok(())
    }
}
