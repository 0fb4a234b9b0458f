//! User entity - owner of projects.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An account holder. Accounts are created by the registration flow, which
/// lives outside this service; here a user is only ever read and has projects
/// appended to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    /// Owned projects, in the order they were added
    pub projects: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(email: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            email,
            projects: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Ownership is membership in the project list, never a back-reference.
    pub fn owns_project(&self, project_id: Uuid) -> bool {
        self.projects.contains(&project_id)
    }
}
