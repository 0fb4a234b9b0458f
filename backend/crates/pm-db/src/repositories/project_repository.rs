use crate::Result as DbErrorResult;
use crate::repositories::{parse_timestamp, parse_uuid};

use pm_core::Project;

use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

#[derive(FromRow)]
struct ProjectRow {
    id: String,
    title: String,
    description: String,
    created_at: i64,
}

pub struct ProjectRepository {
    pool: SqlitePool,
}

impl ProjectRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert the project row. Sprint references are written by
    /// [`ProjectRepository::append_sprint`].
    pub async fn create<'e, E>(executor: E, project: &Project) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query(
            r#"
                INSERT INTO projects (id, title, description, created_at)
                VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(project.id.to_string())
        .bind(&project.title)
        .bind(&project.description)
        .bind(project.created_at.timestamp())
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Project>> {
        let row = sqlx::query_as::<_, ProjectRow>(
            "SELECT id, title, description, created_at FROM projects WHERE id = ?",
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let sprint_ids: Vec<String> = sqlx::query_scalar(
            r#"
                SELECT sprint_id
                FROM project_sprints
                WHERE project_id = ?
                ORDER BY position
            "#,
        )
        .bind(&row.id)
        .fetch_all(&self.pool)
        .await?;

        Ok(Some(Project {
            id: parse_uuid(&row.id, "projects.id")?,
            title: row.title,
            description: row.description,
            sprints: sprint_ids
                .iter()
                .map(|s| parse_uuid(s, "project_sprints.sprint_id"))
                .collect::<DbErrorResult<Vec<_>>>()?,
            created_at: parse_timestamp(row.created_at, "projects.created_at")?,
        }))
    }

    pub async fn exists(&self, id: Uuid) -> DbErrorResult<bool> {
        let found: Option<i64> = sqlx::query_scalar("SELECT 1 FROM projects WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        Ok(found.is_some())
    }

    /// Append `sprint_id` to the end of the project's sprint list.
    pub async fn append_sprint<'e, E>(
        executor: E,
        project_id: Uuid,
        sprint_id: Uuid,
    ) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let project_id = project_id.to_string();

        sqlx::query(
            r#"
                INSERT INTO project_sprints (project_id, sprint_id, position)
                SELECT ?, ?, COALESCE(MAX(position), -1) + 1
                FROM project_sprints
                WHERE project_id = ?
            "#,
        )
        .bind(&project_id)
        .bind(sprint_id.to_string())
        .bind(&project_id)
        .execute(executor)
        .await?;

        Ok(())
    }
}
