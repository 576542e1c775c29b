#![allow(dead_code)]

//! In-memory store implementations shared by the integration tests. Both
//! can be switched into a failing state to exercise the scanner's
//! unavailable-store paths.

use async_trait::async_trait;
use chrono::{Duration, NaiveDateTime, Utc};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use task_reminder::error::{AppError, Result};
use task_reminder::notification::{Notification, NotificationStore};
use task_reminder::scheduler::policy::parse_deadline;
use task_reminder::task::{Task, TaskStore};
use uuid::Uuid;

pub fn task(user_id: Uuid, title: &str, deadline: &str) -> Task {
    Task {
        id: Uuid::new_v4(),
        user_id,
        title: title.to_string(),
        deadline: deadline.to_string(),
        created_at: Utc::now(),
    }
}

pub fn deadline_text(at: NaiveDateTime) -> String {
    at.format("%Y-%m-%dT%H:%M").to_string()
}

#[derive(Clone, Default)]
pub struct MemTaskStore {
    tasks: Arc<Mutex<Vec<Task>>>,
    unavailable: Arc<AtomicBool>,
}

impl MemTaskStore {
    pub fn insert(&self, task: Task) {
        self.tasks.lock().unwrap().push(task);
    }

    pub fn set_deadline(&self, id: Uuid, deadline: &str) {
        let mut tasks = self.tasks.lock().unwrap();
        let task = tasks.iter_mut().find(|t| t.id == id).unwrap();
        task.deadline = deadline.to_string();
    }

    pub fn remove(&self, id: Uuid) {
        self.tasks.lock().unwrap().retain(|t| t.id != id);
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }
}

#[async_trait]
impl TaskStore for MemTaskStore {
    async fn list_due(&self, now: NaiveDateTime, window: Duration) -> Result<Vec<Task>> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(AppError::StoreUnavailable(sqlx::Error::PoolClosed));
        }

        // Rows whose deadline cannot be parsed are still returned, so the
        // scanner sees and reports them instead of them silently vanishing.
        let tasks = self.tasks.lock().unwrap();
        Ok(tasks
            .iter()
            .filter(|t| match parse_deadline(&t.deadline) {
                Ok(deadline) => deadline > now && deadline <= now + window,
                Err(_) => true,
            })
            .cloned()
            .collect())
    }

    async fn get(&self, id: Uuid) -> Result<Option<Task>> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(AppError::StoreUnavailable(sqlx::Error::PoolClosed));
        }
        let tasks = self.tasks.lock().unwrap();
        Ok(tasks.iter().find(|t| t.id == id).cloned())
    }
}

#[derive(Clone, Default)]
pub struct MemNotificationStore {
    notifications: Arc<Mutex<Vec<Notification>>>,
    unavailable: Arc<AtomicBool>,
}

impl MemNotificationStore {
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    pub fn all(&self) -> Vec<Notification> {
        self.notifications.lock().unwrap().clone()
    }

    pub fn count(&self) -> usize {
        self.notifications.lock().unwrap().len()
    }
}

#[async_trait]
impl NotificationStore for MemNotificationStore {
    async fn append(&self, user_id: Uuid, message: &str) -> Result<Notification> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(AppError::StoreUnavailable(sqlx::Error::PoolClosed));
        }
        let notification = Notification {
            id: Uuid::new_v4(),
            user_id,
            message: message.to_string(),
            is_read: false,
            created_at: Utc::now(),
        };
        self.notifications.lock().unwrap().push(notification.clone());
        Ok(notification)
    }

    async fn list_unread(&self, user_id: Uuid) -> Result<Vec<Notification>> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(AppError::StoreUnavailable(sqlx::Error::PoolClosed));
        }
        let mut unread: Vec<Notification> = self
            .notifications
            .lock()
            .unwrap()
            .iter()
            .filter(|n| n.user_id == user_id && !n.is_read)
            .cloned()
            .collect();
        unread.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(unread)
    }

    async fn mark_read(&self, id: Uuid) -> Result<Option<Notification>> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(AppError::StoreUnavailable(sqlx::Error::PoolClosed));
        }
        let mut notifications = self.notifications.lock().unwrap();
        match notifications.iter_mut().find(|n| n.id == id) {
            Some(notification) => {
                notification.is_read = true;
                Ok(Some(notification.clone()))
            }
            None => Ok(None),
        }
    }
}
