use crate::error::Result;
use crate::task::task_models::Task;
use async_trait::async_trait;
use chrono::{Duration, NaiveDateTime};
use uuid::Uuid;

/// Read surface the deadline scanner depends on.
///
/// Foreground handlers write to the same underlying store through whatever
/// concrete API it offers (see [`super::TaskRepository`]); the scanner only
/// ever reads. Each call is atomic on its own; tasks may appear, mutate or
/// disappear between calls and callers must tolerate that.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Every task whose deadline falls in `(now, now + window]`, across all
    /// users, deadline ascending. Implementations may over-approximate
    /// (e.g. include rows they cannot order); the scanner re-checks each
    /// candidate against the parsed deadline before reminding.
    async fn list_due(&self, now: NaiveDateTime, window: Duration) -> Result<Vec<Task>>;

    async fn get(&self, id: Uuid) -> Result<Option<Task>>;
}
