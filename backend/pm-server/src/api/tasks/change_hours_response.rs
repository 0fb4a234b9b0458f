use pm_core::DayHours;

use serde::Serialize;

/// Result of recording wasted hours against one day
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeHoursResponse {
    pub day: DayHours,
    pub new_wasted_hours: u32,
}
