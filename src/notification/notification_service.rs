use crate::error::{AppError, Result};
use crate::notification::dispatcher;
use crate::notification::notification_models::Notification;
use crate::notification::notification_store::NotificationStore;
use uuid::Uuid;

/// Foreground facade over the notification store: the unread list and
/// mark-read actions the frontend calls, plus the immediate notifications
/// raised alongside task create/update.
#[derive(Clone)]
pub struct NotificationService<N> {
    store: N,
}

impl<N: NotificationStore> NotificationService<N> {
    pub fn new(store: N) -> Self {
        Self { store }
    }

    pub async fn list_unread(&self, user_id: Uuid) -> Result<Vec<Notification>> {
        self.store.list_unread(user_id).await
    }

    pub async fn mark_read(&self, id: Uuid) -> Result<Notification> {
        self.store
            .mark_read(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Notification not found".into()))
    }

    pub async fn task_created(
        &self,
        user_id: Uuid,
        title: &str,
        deadline: &str,
    ) -> Result<Notification> {
        let message = dispatcher::task_created(title, deadline);
        self.store.append(user_id, &message).await
    }

    pub async fn task_updated(
        &self,
        user_id: Uuid,
        title: &str,
        deadline: &str,
    ) -> Result<Notification> {
        let message = dispatcher::task_updated(title, deadline);
        self.store.append(user_id, &message).await
    }
}
