use chrono::NaiveDate;
use pm_core::{Project, Sprint, Task, User};
use uuid::Uuid;

/// Creates a test User with a unique email
pub fn create_test_user() -> User {
    User::new(format!("test-{}@example.com", Uuid::new_v4()))
}

pub fn create_test_project() -> Project {
    Project::new("Test Project".to_string(), "Test project description".to_string())
}

/// Creates a three day sprint ending 2020-12-31
pub fn create_test_sprint(project_id: Uuid) -> Sprint {
    let end_date = NaiveDate::from_ymd_opt(2020, 12, 31).unwrap();
    Sprint::new(project_id, "Test Sprint".to_string(), end_date, 3).unwrap()
}

pub fn create_test_task(sprint: &Sprint, title: &str) -> Task {
    Task::new(title.to_string(), 4, sprint).unwrap()
}
