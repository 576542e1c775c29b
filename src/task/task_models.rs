use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Task {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    /// Local deadline as submitted by the frontend, `YYYY-MM-DDTHH:MM`.
    /// Parsed with [`crate::scheduler::policy::parse_deadline`] wherever a
    /// scheduling decision is made; kept as text at the storage boundary.
    pub deadline: String,
    pub created_at: DateTime<Utc>,
}
