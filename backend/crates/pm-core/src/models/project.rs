//! Project entity - top-level container for sprints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A project owned by exactly one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    /// Sprints in the order they were added
    pub sprints: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl Project {
    /// Create a new project with no sprints
    pub fn new(title: String, description: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            description,
            sprints: Vec::new(),
            created_at: Utc::now(),
        }
    }
}
