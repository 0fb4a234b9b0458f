use crate::Result as DbErrorResult;
use crate::repositories::{parse_count, parse_date, parse_timestamp, parse_uuid};

use pm_core::{DayHours, Task, format_day};

use std::collections::HashMap;

use sqlx::{FromRow, SqliteConnection, SqlitePool};
use uuid::Uuid;

#[derive(FromRow)]
struct TaskRow {
    id: String,
    title: String,
    hours_planned: i64,
    hours_wasted: i64,
    created_at: i64,
}

#[derive(FromRow)]
struct TaskDayRow {
    task_id: String,
    day: String,
    hours_wasted: i64,
}

impl TaskDayRow {
    fn into_day_hours(self) -> DbErrorResult<DayHours> {
        Ok(DayHours {
            current_day: parse_date(&self.day, "task_days.day")?,
            single_hours_wasted: parse_count(self.hours_wasted, "task_days.hours_wasted")?,
        })
    }
}

impl TaskRow {
    fn into_task(self, hours_wasted_per_day: Vec<DayHours>) -> DbErrorResult<Task> {
        Ok(Task {
            id: parse_uuid(&self.id, "tasks.id")?,
            title: self.title,
            hours_planned: parse_count(self.hours_planned, "tasks.hours_planned")?,
            hours_wasted: parse_count(self.hours_wasted, "tasks.hours_wasted")?,
            hours_wasted_per_day,
            created_at: parse_timestamp(self.created_at, "tasks.created_at")?,
        })
    }
}

pub struct TaskRepository {
    pool: SqlitePool,
}

impl TaskRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert the task and all of its per-day rows.
    ///
    /// Takes a connection rather than a generic executor because it issues
    /// several statements; pass `&mut *tx` to keep them in one transaction.
    pub async fn create(conn: &mut SqliteConnection, task: &Task) -> DbErrorResult<()> {
        let task_id = task.id.to_string();

        sqlx::query(
            r#"
                INSERT INTO tasks (id, title, hours_planned, hours_wasted, created_at)
                VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&task_id)
        .bind(&task.title)
        .bind(i64::from(task.hours_planned))
        .bind(i64::from(task.hours_wasted))
        .bind(task.created_at.timestamp())
        .execute(&mut *conn)
        .await?;

        for day in &task.hours_wasted_per_day {
            sqlx::query("INSERT INTO task_days (task_id, day, hours_wasted) VALUES (?, ?, ?)")
                .bind(&task_id)
                .bind(format_day(day.current_day))
                .bind(i64::from(day.single_hours_wasted))
                .execute(&mut *conn)
                .await?;
        }

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Task>> {
        let id_str = id.to_string();

        let row = sqlx::query_as::<_, TaskRow>(
            r#"
                SELECT id, title, hours_planned, hours_wasted, created_at
                FROM tasks
                WHERE id = ?
            "#,
        )
        .bind(&id_str)
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let days = sqlx::query_as::<_, TaskDayRow>(
            r#"
                SELECT task_id, day, hours_wasted
                FROM task_days
                WHERE task_id = ?
                ORDER BY day
            "#,
        )
        .bind(&id_str)
        .fetch_all(&self.pool)
        .await?
        .into_iter()
        .map(TaskDayRow::into_day_hours)
        .collect::<DbErrorResult<Vec<_>>>()?;

        row.into_task(days).map(Some)
    }

    /// Tasks of a sprint in the order they were added to it.
    pub async fn find_by_sprint(&self, sprint_id: Uuid) -> DbErrorResult<Vec<Task>> {
        let sprint_id = sprint_id.to_string();

        let rows = sqlx::query_as::<_, TaskRow>(
            r#"
                SELECT t.id, t.title, t.hours_planned, t.hours_wasted, t.created_at
                FROM tasks t
                JOIN sprint_tasks st ON st.task_id = t.id
                WHERE st.sprint_id = ?
                ORDER BY st.position
            "#,
        )
        .bind(&sprint_id)
        .fetch_all(&self.pool)
        .await?;

        let day_rows = sqlx::query_as::<_, TaskDayRow>(
            r#"
                SELECT td.task_id, td.day, td.hours_wasted
                FROM task_days td
                JOIN sprint_tasks st ON st.task_id = td.task_id
                WHERE st.sprint_id = ?
                ORDER BY td.task_id, td.day
            "#,
        )
        .bind(&sprint_id)
        .fetch_all(&self.pool)
        .await?;

        let mut days_by_task: HashMap<String, Vec<DayHours>> = HashMap::new();
        for day_row in day_rows {
            let task_id = day_row.task_id.clone();
            days_by_task
                .entry(task_id)
                .or_default()
                .push(day_row.into_day_hours()?);
        }

        rows.into_iter()
            .map(|row| {
                let days = days_by_task.remove(&row.id).unwrap_or_default();
                row.into_task(days)
            })
            .collect()
    }

    /// Persist one changed day and return the task's recomputed total.
    ///
    /// The total is summed from the stored day rows inside the same statement
    /// sequence, so concurrent updates of other days are never overwritten by
    /// a stale figure. Run it in a transaction (`&mut *tx`); the first
    /// statement is a write, so SQLite serializes concurrent callers here.
    pub async fn update_day(
        conn: &mut SqliteConnection,
        task_id: Uuid,
        day: &DayHours,
    ) -> DbErrorResult<u32> {
        let task_id = task_id.to_string();

        sqlx::query("UPDATE task_days SET hours_wasted = ? WHERE task_id = ? AND day = ?")
            .bind(i64::from(day.single_hours_wasted))
            .bind(&task_id)
            .bind(format_day(day.current_day))
            .execute(&mut *conn)
            .await?;

        let total: i64 = sqlx::query_scalar(
            r#"
                UPDATE tasks
                SET hours_wasted = (
                    SELECT COALESCE(SUM(hours_wasted), 0)
                    FROM task_days
                    WHERE task_id = ?
                )
                WHERE id = ?
                RETURNING hours_wasted
            "#,
        )
        .bind(&task_id)
        .bind(&task_id)
        .fetch_one(&mut *conn)
        .await?;

        parse_count(total, "tasks.hours_wasted")
    }

    /// Delete the task and its per-day rows. The sprint reference is removed
    /// separately by [`crate::SprintRepository::remove_task`].
    pub async fn delete(conn: &mut SqliteConnection, task_id: Uuid) -> DbErrorResult<()> {
        let task_id = task_id.to_string();

        sqlx::query("DELETE FROM task_days WHERE task_id = ?")
            .bind(&task_id)
            .execute(&mut *conn)
            .await?;

        sqlx::query("DELETE FROM tasks WHERE id = ?")
            .bind(&task_id)
            .execute(&mut *conn)
            .await?;

        Ok(())
    }
}
