pub mod create_sprint_request;
pub mod sprint_response;
pub mod sprints;
