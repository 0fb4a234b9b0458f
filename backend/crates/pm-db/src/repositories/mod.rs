pub mod project_repository;
pub mod session_repository;
pub mod sprint_repository;
pub mod task_repository;
pub mod user_repository;

use crate::{DbError, Result as DbErrorResult};

use pm_core::{ErrorLocation, parse_day};

use std::panic::Location;

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

#[track_caller]
pub(crate) fn parse_uuid(value: &str, column: &str) -> DbErrorResult<Uuid> {
    Uuid::parse_str(value).map_err(|e| DbError::InvalidData {
        message: format!("Invalid UUID in {}: {}", column, e),
        location: ErrorLocation::from(Location::caller()),
    })
}

#[track_caller]
pub(crate) fn parse_date(value: &str, column: &str) -> DbErrorResult<NaiveDate> {
    parse_day(value).ok_or_else(|| DbError::InvalidData {
        message: format!("Invalid date in {}: {}", column, value),
        location: ErrorLocation::from(Location::caller()),
    })
}

#[track_caller]
pub(crate) fn parse_timestamp(value: i64, column: &str) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp(value, 0).ok_or_else(|| DbError::InvalidData {
        message: format!("Invalid timestamp in {}: {}", column, value),
        location: ErrorLocation::from(Location::caller()),
    })
}

#[track_caller]
pub(crate) fn parse_count<T: TryFrom<i64>>(value: i64, column: &str) -> DbErrorResult<T> {
    T::try_from(value).map_err(|_| DbError::InvalidData {
        message: format!("Out of range value in {}: {}", column, value),
        location: ErrorLocation::from(Location::caller()),
    })
}
