use crate::error::Result;
use crate::task::task_models::Task;
use crate::task::task_store::TaskStore;
use async_trait::async_trait;
use chrono::{Duration, NaiveDateTime};
use sqlx::PgPool;
use uuid::Uuid;

pub const DEADLINE_INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M";

#[derive(Clone)]
pub struct TaskRepository {
    pool: PgPool,
}

impl TaskRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, user_id: Uuid, title: &str, deadline: &str) -> Result<Task> {
        let task = sqlx::query_as::<_, Task>(
            "INSERT INTO tasks (user_id, title, deadline)
             VALUES ($1, $2, $3)
             RETURNING *",
        )
        .bind(user_id)
        .bind(title)
        .bind(deadline)
        .fetch_one(&self.pool)
        .await?;

        Ok(task)
    }

    pub async fn update(&self, id: Uuid, title: &str, deadline: &str) -> Result<Option<Task>> {
        let task = sqlx::query_as::<_, Task>(
            "UPDATE tasks SET title = $2, deadline = $3 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(title)
        .bind(deadline)
        .fetch_optional(&self.pool)
        .await?;

        Ok(task)
    }

    pub async fn delete(&self, id: Uuid) -> Result<u64> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// User's tasks, soonest deadline first (index view ordering).
    pub async fn find_all_by_user(&self, user_id: Uuid) -> Result<Vec<Task>> {
        let tasks = sqlx::query_as::<_, Task>(
            "SELECT * FROM tasks WHERE user_id = $1 ORDER BY deadline",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(tasks)
    }
}

#[async_trait]
impl TaskStore for TaskRepository {
    async fn list_due(&self, now: NaiveDateTime, window: Duration) -> Result<Vec<Task>> {
        // Deadlines are fixed-shape timestamp text, so the lexicographic
        // range matches the chronological one. Bounds carry seconds so a
        // seconds-bearing deadline in the window's final minute is not
        // deferred a cycle. Rows whose text does not even look like a
        // timestamp are returned too: the scanner must see and report them
        // every cycle rather than have the range silently exclude them.
        let lower = now.format("%Y-%m-%dT%H:%M:%S").to_string();
        let upper = (now + window).format("%Y-%m-%dT%H:%M:%S").to_string();

        let tasks = sqlx::query_as::<_, Task>(
            "SELECT * FROM tasks
             WHERE (deadline > $1 AND deadline <= $2)
                OR deadline !~ '^\\d{4}-\\d{2}-\\d{2}T\\d{2}:\\d{2}'
             ORDER BY deadline",
        )
        .bind(lower)
        .bind(upper)
        .fetch_all(&self.pool)
        .await?;

        Ok(tasks)
    }

    async fn get(&self, id: Uuid) -> Result<Option<Task>> {
        let task = sqlx::query_as::<_, Task>("SELECT * FROM tasks WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(task)
    }
}
