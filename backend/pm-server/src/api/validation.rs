//! Field checks shared by the request DTOs.
//!
//! Messages use the `"field" must ...` wording clients already match on.

use crate::{ApiError, ApiResult};

use pm_core::{parse_day, parse_day_lenient};

use chrono::NaiveDate;
use serde_json::{Number, Value};
use uuid::Uuid;

pub const INVALID_DATE_MESSAGE: &str = "Invalid 'date'. Please, use YYYY-MM-DD string format";

/// A present, non-blank string of at most `max_len` characters, trimmed.
#[track_caller]
pub fn required_text(field: &str, value: Option<String>, max_len: usize) -> ApiResult<String> {
    let value = value.ok_or_else(|| is_required(field))?;

    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ApiError::validation(
            format!("\"{field}\" is not allowed to be empty"),
            field,
        ));
    }

    if trimmed.chars().count() > max_len {
        return Err(ApiError::validation(
            format!("\"{field}\" length must be less than or equal to {max_len} characters long"),
            field,
        ));
    }

    Ok(trimmed.to_string())
}

/// A present whole number within `min..=max`, converted to the target width.
///
/// Takes the raw JSON value; a wrong type is reported against the field.
/// `3.0` counts as whole.
#[track_caller]
pub fn bounded<T>(field: &str, value: Option<Value>, min: i64, max: i64) -> ApiResult<T>
where
    T: TryFrom<i64>,
{
    let value = match value.ok_or_else(|| is_required(field))? {
        Value::Number(n) => whole_number(&n)
            .ok_or_else(|| ApiError::validation(format!("\"{field}\" must be an integer"), field))?,
        _ => {
            return Err(ApiError::validation(
                format!("\"{field}\" must be a number"),
                field,
            ));
        }
    };

    if value < min {
        return Err(ApiError::validation(
            format!("\"{field}\" must be greater than or equal to {min}"),
            field,
        ));
    }
    if value > max {
        return Err(ApiError::validation(
            format!("\"{field}\" must be less than or equal to {max}"),
            field,
        ));
    }

    T::try_from(value).map_err(|_| {
        ApiError::validation(format!("\"{field}\" must be less than or equal to {max}"), field)
    })
}

/// Zero-padded `YYYY-MM-DD` only.
#[track_caller]
pub fn strict_date(field: &str, value: Option<String>) -> ApiResult<NaiveDate> {
    let value = value.ok_or_else(|| is_required(field))?;
    parse_day(&value).ok_or_else(|| ApiError::validation(INVALID_DATE_MESSAGE, field))
}

/// `YYYY-M-D` with or without zero padding.
#[track_caller]
pub fn lenient_date(field: &str, value: Option<String>) -> ApiResult<NaiveDate> {
    let value = value.ok_or_else(|| is_required(field))?;
    parse_day_lenient(&value).ok_or_else(|| ApiError::validation(INVALID_DATE_MESSAGE, field))
}

/// Path identifiers; `name` is the parameter name clients see.
#[track_caller]
pub fn path_id(name: &str, raw: &str) -> ApiResult<Uuid> {
    Uuid::parse_str(raw)
        .map_err(|_| ApiError::validation(format!("Invalid '{name}'. Must be a UUID"), name))
}

fn whole_number(n: &Number) -> Option<i64> {
    if let Some(i) = n.as_i64() {
        return Some(i);
    }

    // Out-of-range whole floats saturate; the range check rejects them
    n.as_f64()
        .filter(|f| f.is_finite() && f.fract() == 0.0)
        .map(|f| f as i64)
}

#[track_caller]
fn is_required(field: &str) -> ApiError {
    ApiError::validation(format!("\"{field}\" is required"), field)
}
