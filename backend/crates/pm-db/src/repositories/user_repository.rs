use crate::Result as DbErrorResult;
use crate::repositories::{parse_timestamp, parse_uuid};

use pm_core::User;

use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

#[derive(FromRow)]
struct UserRow {
    id: String,
    email: String,
    created_at: i64,
}

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert the account row. Any projects already on `user` are not written;
    /// they are attached through [`UserRepository::append_project`].
    pub async fn create(&self, user: &User) -> DbErrorResult<()> {
        sqlx::query("INSERT INTO users (id, email, created_at) VALUES (?, ?, ?)")
            .bind(user.id.to_string())
            .bind(&user.email)
            .bind(user.created_at.timestamp())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Load a user together with its owned project ids, oldest first.
    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, email, created_at FROM users WHERE id = ?",
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let project_ids: Vec<String> = sqlx::query_scalar(
            r#"
                SELECT project_id
                FROM user_projects
                WHERE user_id = ?
                ORDER BY position
            "#,
        )
        .bind(&row.id)
        .fetch_all(&self.pool)
        .await?;

        Ok(Some(User {
            id: parse_uuid(&row.id, "users.id")?,
            email: row.email,
            projects: project_ids
                .iter()
                .map(|p| parse_uuid(p, "user_projects.project_id"))
                .collect::<DbErrorResult<Vec<_>>>()?,
            created_at: parse_timestamp(row.created_at, "users.created_at")?,
        }))
    }

    /// Append `project_id` to the end of the user's project list.
    ///
    /// The new position is computed in the same statement, so two appends
    /// racing on one user both land.
    pub async fn append_project<'e, E>(
        executor: E,
        user_id: Uuid,
        project_id: Uuid,
    ) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let user_id = user_id.to_string();

        sqlx::query(
            r#"
                INSERT INTO user_projects (user_id, project_id, position)
                SELECT ?, ?, COALESCE(MAX(position), -1) + 1
                FROM user_projects
                WHERE user_id = ?
            "#,
        )
        .bind(&user_id)
        .bind(project_id.to_string())
        .bind(&user_id)
        .execute(executor)
        .await?;

        Ok(())
    }
}
