use crate::Sprint;
use crate::tests::day;

use googletest::prelude::*;
use uuid::Uuid;

#[test]
fn given_end_date_and_duration_when_sprint_created_then_start_date_is_derived() {
    let project_id = Uuid::new_v4();

    let sprint = Sprint::new(project_id, "Sprint 1".to_string(), day(2020, 12, 31), 2).unwrap();

    assert_that!(sprint.project_id, eq(project_id));
    assert_that!(sprint.start_date, eq(day(2020, 12, 30)));
    assert_that!(sprint.end_date, eq(day(2020, 12, 31)));
    assert_that!(sprint.duration, eq(2));
    assert_that!(sprint.tasks, is_empty());
}

#[test]
fn given_single_day_sprint_when_created_then_start_equals_end() {
    let sprint = Sprint::new(Uuid::new_v4(), "Hotfix".to_string(), day(2021, 3, 1), 1).unwrap();

    assert_that!(sprint.start_date, eq(sprint.end_date));
}

#[test]
fn given_sprint_crossing_leap_day_when_created_then_start_accounts_for_february_29() {
    let sprint = Sprint::new(Uuid::new_v4(), "Leap".to_string(), day(2020, 3, 2), 4).unwrap();

    assert_that!(sprint.start_date, eq(day(2020, 2, 28)));
}
