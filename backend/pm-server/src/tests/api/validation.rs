use crate::ApiError;
use crate::api::validation::{bounded, lenient_date, path_id, required_text, strict_date};

use chrono::NaiveDate;
use googletest::prelude::*;
use serde_json::json;
use uuid::Uuid;

fn message_of(error: ApiError) -> String {
    match error {
        ApiError::Validation { message, .. } => message,
        other => panic!("Expected Validation, got {other:?}"),
    }
}

#[test]
fn given_padded_text_when_required_then_returns_trimmed() {
    let title = required_text("title", Some("  Backlog  ".into()), 200).unwrap();

    assert_that!(title, eq("Backlog"));
}

#[test]
fn given_missing_text_when_required_then_is_required_message() {
    let err = required_text("title", None, 200).unwrap_err();

    assert_that!(message_of(err), eq("\"title\" is required"));
}

#[test]
fn given_blank_text_when_required_then_empty_message() {
    let err = required_text("description", Some("   ".into()), 200).unwrap_err();

    assert_that!(
        message_of(err),
        eq("\"description\" is not allowed to be empty")
    );
}

#[test]
fn given_long_text_when_required_then_length_message() {
    let err = required_text("title", Some("x".repeat(6)), 5).unwrap_err();

    assert_that!(
        message_of(err),
        eq("\"title\" length must be less than or equal to 5 characters long")
    );
}

#[test]
fn given_multibyte_text_at_limit_when_required_then_accepted() {
    let title = required_text("title", Some("ééééé".into()), 5).unwrap();

    assert_that!(title.chars().count(), eq(5));
}

#[test]
fn given_value_in_range_when_bounded_then_converted() {
    let hours: u8 = bounded("hours", Some(json!(8)), 0, 8).unwrap();

    assert_that!(hours, eq(8));
}

#[test]
fn given_value_below_min_when_bounded_then_min_message() {
    let err = bounded::<u8>("hoursPlanned", Some(json!(0)), 1, 8).unwrap_err();

    assert_that!(
        message_of(err),
        eq("\"hoursPlanned\" must be greater than or equal to 1")
    );
}

#[test]
fn given_value_above_max_when_bounded_then_max_message() {
    let err = bounded::<u8>("hours", Some(json!(9)), 0, 8).unwrap_err();

    assert_that!(message_of(err), eq("\"hours\" must be less than or equal to 8"));
}

#[test]
fn given_whole_float_when_bounded_then_accepted() {
    let duration: u32 = bounded("duration", Some(json!(3.0)), 1, 366).unwrap();

    assert_that!(duration, eq(3));
}

#[test]
fn given_fraction_when_bounded_then_integer_message() {
    let err = bounded::<u8>("hoursPlanned", Some(json!(2.5)), 1, 8).unwrap_err();

    assert_that!(message_of(err), eq("\"hoursPlanned\" must be an integer"));
}

#[test]
fn given_string_when_bounded_then_number_message() {
    let err = bounded::<u8>("hours", Some(json!("3")), 0, 8).unwrap_err();

    assert_that!(message_of(err), eq("\"hours\" must be a number"));
}

#[test]
fn given_huge_number_when_bounded_then_max_message() {
    let err = bounded::<u32>("duration", Some(json!(u64::MAX)), 1, 366).unwrap_err();

    assert_that!(
        message_of(err),
        eq("\"duration\" must be less than or equal to 366")
    );
}

#[test]
fn given_unpadded_date_when_strict_then_rejected() {
    let err = strict_date("endDate", Some("2020-1-5".into())).unwrap_err();

    assert_that!(
        message_of(err),
        eq("Invalid 'date'. Please, use YYYY-MM-DD string format")
    );
}

#[test]
fn given_unpadded_date_when_lenient_then_parsed() {
    let day = lenient_date("date", Some("2020-1-5".into())).unwrap();

    assert_that!(day, eq(NaiveDate::from_ymd_opt(2020, 1, 5).unwrap()));
}

#[test]
fn given_impossible_date_when_strict_then_rejected() {
    let result = strict_date("endDate", Some("2021-02-30".into()));

    assert!(result.is_err());
}

#[test]
fn given_uuid_when_path_id_then_parsed() {
    let id = Uuid::new_v4();

    assert_that!(path_id("taskId", &id.to_string()).unwrap(), eq(id));
}

#[test]
fn given_non_uuid_when_path_id_then_names_parameter() {
    let err = path_id("sprintId", "42").unwrap_err();

    match err {
        ApiError::Validation { message, field, .. } => {
            assert_that!(message, eq("Invalid 'sprintId'. Must be a UUID"));
            assert_that!(field.as_deref(), some(eq("sprintId")));
        }
        other => panic!("Expected Validation, got {other:?}"),
    }
}
