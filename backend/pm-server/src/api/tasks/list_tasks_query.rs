use serde::Deserialize;

/// Query parameters for `GET /task/{sprintId}`
#[derive(Debug, Deserialize)]
pub struct ListTasksQuery {
    /// Case-insensitive substring of the title
    pub search: Option<String>,
}
