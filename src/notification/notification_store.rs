use crate::error::Result;
use crate::notification::notification_models::Notification;
use async_trait::async_trait;
use uuid::Uuid;

/// Durable notification record. Appended to by the scanner and by foreground
/// create/update handlers; read and marked by the foreground only.
#[async_trait]
pub trait NotificationStore: Send + Sync {
    async fn append(&self, user_id: Uuid, message: &str) -> Result<Notification>;

    /// Unread notifications for one user, newest first.
    async fn list_unread(&self, user_id: Uuid) -> Result<Vec<Notification>>;

    /// Marks a notification read. `None` when the id is unknown. Marking an
    /// already-read notification is a no-op that still returns the row.
    async fn mark_read(&self, id: Uuid) -> Result<Option<Notification>>;
}
