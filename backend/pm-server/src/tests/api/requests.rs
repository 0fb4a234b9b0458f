use crate::{
    ApiError, CreateProjectRequest, CreateSprintRequest, CreateTaskRequest, HoursChange,
    NewProject, NewSprint, NewTask, UpdateTaskHoursRequest,
};

use pm_config::ValidationConfig;

use chrono::NaiveDate;
use googletest::prelude::*;

fn field_of(error: ApiError) -> Option<String> {
    match error {
        ApiError::Validation { field, .. } => field,
        other => panic!("Expected Validation, got {other:?}"),
    }
}

#[test]
fn given_complete_project_body_when_validated_then_returns_new_project() {
    let request: CreateProjectRequest =
        serde_json::from_str(r#"{"title": " Web ", "description": "Site rework"}"#).unwrap();

    let project = request.validate(&ValidationConfig::default()).unwrap();

    assert_that!(
        project,
        eq(&NewProject {
            title: "Web".into(),
            description: "Site rework".into(),
        })
    );
}

#[test]
fn given_project_without_description_when_validated_then_description_field_fails() {
    let request: CreateProjectRequest = serde_json::from_str(r#"{"title": "Web"}"#).unwrap();

    let err = request.validate(&ValidationConfig::default()).unwrap_err();

    assert_that!(field_of(err).as_deref(), some(eq("description")));
}

#[test]
fn given_sprint_body_when_validated_then_returns_new_sprint() {
    let request: CreateSprintRequest =
        serde_json::from_str(r#"{"title": "S1", "endDate": "2020-12-31", "duration": 3}"#)
            .unwrap();

    let sprint = request.validate(&ValidationConfig::default()).unwrap();

    assert_that!(
        sprint,
        eq(&NewSprint {
            title: "S1".into(),
            end_date: NaiveDate::from_ymd_opt(2020, 12, 31).unwrap(),
            duration: 3,
        })
    );
}

#[test]
fn given_zero_duration_when_validated_then_duration_field_fails() {
    let request: CreateSprintRequest =
        serde_json::from_str(r#"{"title": "S1", "endDate": "2020-12-31", "duration": 0}"#)
            .unwrap();

    let err = request.validate(&ValidationConfig::default()).unwrap_err();

    assert_that!(field_of(err).as_deref(), some(eq("duration")));
}

#[test]
fn given_duration_over_configured_max_when_validated_then_fails() {
    let limits = ValidationConfig {
        max_sprint_duration: 14,
        ..ValidationConfig::default()
    };
    let request: CreateSprintRequest =
        serde_json::from_str(r#"{"title": "S1", "endDate": "2020-12-31", "duration": 15}"#)
            .unwrap();

    let err = request.validate(&limits).unwrap_err();

    assert_that!(field_of(err).as_deref(), some(eq("duration")));
}

#[test]
fn given_hours_planned_nine_when_validated_then_hours_planned_field_fails() {
    let request: CreateTaskRequest =
        serde_json::from_str(r#"{"title": "Login", "hoursPlanned": 9}"#).unwrap();

    let err = request.validate(&ValidationConfig::default()).unwrap_err();

    assert_that!(field_of(err).as_deref(), some(eq("hoursPlanned")));
}

#[test]
fn given_fractional_hours_planned_when_validated_then_hours_planned_field_fails() {
    let request: CreateTaskRequest =
        serde_json::from_str(r#"{"title": "Login", "hoursPlanned": 2.5}"#).unwrap();

    let err = request.validate(&ValidationConfig::default()).unwrap_err();

    assert_that!(field_of(err).as_deref(), some(eq("hoursPlanned")));
}

#[test]
fn given_task_body_when_validated_then_returns_new_task() {
    let request: CreateTaskRequest =
        serde_json::from_str(r#"{"title": "Login", "hoursPlanned": 1}"#).unwrap();

    let task = request.validate(&ValidationConfig::default()).unwrap();

    assert_that!(
        task,
        eq(&NewTask {
            title: "Login".into(),
            hours_planned: 1,
        })
    );
}

#[test]
fn given_unpadded_patch_date_when_validated_then_accepted() {
    let request: UpdateTaskHoursRequest =
        serde_json::from_str(r#"{"date": "2020-12-9", "hours": 0}"#).unwrap();

    let change = request.validate().unwrap();

    assert_that!(
        change,
        eq(&HoursChange {
            day: NaiveDate::from_ymd_opt(2020, 12, 9).unwrap(),
            hours: 0,
        })
    );
}

#[test]
fn given_patch_without_hours_when_validated_then_hours_field_fails() {
    let request: UpdateTaskHoursRequest =
        serde_json::from_str(r#"{"date": "2020-12-29"}"#).unwrap();

    let err = request.validate().unwrap_err();

    assert_that!(field_of(err).as_deref(), some(eq("hours")));
}
