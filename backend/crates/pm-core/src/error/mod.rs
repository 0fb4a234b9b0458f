use chrono::NaiveDate;
use error_location::ErrorLocation;
use thiserror::Error;

use std::result::Result as StdResult;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Date out of range: {message} {location}")]
    DateOutOfRange {
        message: String,
        location: ErrorLocation,
    },

    #[error("Day {day} is not part of the sprint {location}")]
    DayNotInSprint {
        day: NaiveDate,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
