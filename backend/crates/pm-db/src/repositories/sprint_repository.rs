use crate::Result as DbErrorResult;
use crate::repositories::{parse_count, parse_date, parse_timestamp, parse_uuid};

use pm_core::{Sprint, format_day};

use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

#[derive(FromRow)]
struct SprintRow {
    id: String,
    project_id: String,
    title: String,
    start_date: String,
    end_date: String,
    duration: i64,
    created_at: i64,
}

pub struct SprintRepository {
    pool: SqlitePool,
}

impl SprintRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert the sprint row. Task references are written by
    /// [`SprintRepository::append_task`].
    pub async fn create<'e, E>(executor: E, sprint: &Sprint) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query(
            r#"
                INSERT INTO sprints (
                                     id, project_id, title,
                                     start_date, end_date, duration, created_at
                                     ) VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(sprint.id.to_string())
        .bind(sprint.project_id.to_string())
        .bind(&sprint.title)
        .bind(format_day(sprint.start_date))
        .bind(format_day(sprint.end_date))
        .bind(i64::from(sprint.duration))
        .bind(sprint.created_at.timestamp())
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Sprint>> {
        let row = sqlx::query_as::<_, SprintRow>(
            r#"
                SELECT id, project_id, title, start_date, end_date, duration, created_at
                FROM sprints
                WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let task_ids: Vec<String> = sqlx::query_scalar(
            r#"
                SELECT task_id
                FROM sprint_tasks
                WHERE sprint_id = ?
                ORDER BY position
            "#,
        )
        .bind(&row.id)
        .fetch_all(&self.pool)
        .await?;

        Ok(Some(Sprint {
            id: parse_uuid(&row.id, "sprints.id")?,
            project_id: parse_uuid(&row.project_id, "sprints.project_id")?,
            title: row.title,
            start_date: parse_date(&row.start_date, "sprints.start_date")?,
            end_date: parse_date(&row.end_date, "sprints.end_date")?,
            duration: parse_count(row.duration, "sprints.duration")?,
            tasks: task_ids
                .iter()
                .map(|t| parse_uuid(t, "sprint_tasks.task_id"))
                .collect::<DbErrorResult<Vec<_>>>()?,
            created_at: parse_timestamp(row.created_at, "sprints.created_at")?,
        }))
    }

    /// The sprint whose task list references `task_id`.
    pub async fn find_by_task(&self, task_id: Uuid) -> DbErrorResult<Option<Sprint>> {
        let sprint_id: Option<String> =
            sqlx::query_scalar("SELECT sprint_id FROM sprint_tasks WHERE task_id = ?")
                .bind(task_id.to_string())
                .fetch_optional(&self.pool)
                .await?;

        match sprint_id {
            Some(id) => self.find_by_id(parse_uuid(&id, "sprint_tasks.sprint_id")?).await,
            None => Ok(None),
        }
    }

    /// Append `task_id` to the end of the sprint's task list.
    pub async fn append_task<'e, E>(
        executor: E,
        sprint_id: Uuid,
        task_id: Uuid,
    ) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let sprint_id = sprint_id.to_string();

        sqlx::query(
            r#"
                INSERT INTO sprint_tasks (sprint_id, task_id, position)
                SELECT ?, ?, COALESCE(MAX(position), -1) + 1
                FROM sprint_tasks
                WHERE sprint_id = ?
            "#,
        )
        .bind(&sprint_id)
        .bind(task_id.to_string())
        .bind(&sprint_id)
        .execute(executor)
        .await?;

        Ok(())
    }

    /// Drop `task_id` from the sprint's task list; remaining order is kept.
    pub async fn remove_task<'e, E>(
        executor: E,
        sprint_id: Uuid,
        task_id: Uuid,
    ) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query("DELETE FROM sprint_tasks WHERE sprint_id = ? AND task_id = ?")
            .bind(sprint_id.to_string())
            .bind(task_id.to_string())
            .execute(executor)
            .await?;

        Ok(())
    }
}
