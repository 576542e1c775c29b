//! Deadline reminder core for a personal task tracker.
//!
//! The web frontend owns pages, sessions and routing; it talks to this crate
//! through [`task::TaskStore`] / [`notification::NotificationStore`] and the
//! [`notification::NotificationService`] facade. The one piece with its own
//! thread of control is [`scheduler::DeadlineScanner`], which wakes on a
//! fixed period, finds tasks due within the reminder window and appends at
//! most one notification per (task, deadline value) pair.

pub mod config;
pub mod db;
pub mod error;
pub mod notification;
pub mod scheduler;
pub mod task;
