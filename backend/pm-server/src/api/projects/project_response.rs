use pm_core::Project;

use serde::Serialize;
use uuid::Uuid;

/// Created project as returned to the client
#[derive(Debug, Serialize)]
pub struct ProjectResponse {
    pub title: String,
    pub description: String,
    pub id: Uuid,
}

impl From<Project> for ProjectResponse {
    fn from(p: Project) -> Self {
        Self {
            title: p.title,
            description: p.description,
            id: p.id,
        }
    }
}
