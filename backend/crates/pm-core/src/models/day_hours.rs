use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Wasted hours recorded against one calendar day of a task's sprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayHours {
    pub current_day: NaiveDate,
    pub single_hours_wasted: u8,
}

impl DayHours {
    pub fn new(current_day: NaiveDate) -> Self {
        Self {
            current_day,
            single_hours_wasted: 0,
        }
    }
}
