//! Human-readable notification messages. Formatting lives here so the
//! scanner and the foreground handlers produce identical wording.

use chrono::NaiveDateTime;

const DEADLINE_DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M";

pub fn deadline_reminder(title: &str, deadline: NaiveDateTime) -> String {
    format!(
        "Task \"{}\" is due at {}",
        title,
        deadline.format(DEADLINE_DISPLAY_FORMAT)
    )
}

pub fn task_created(title: &str, deadline: &str) -> String {
    format!("New to-do item added: {} with deadline {}", title, deadline)
}

pub fn task_updated(title: &str, deadline: &str) -> String {
    format!("To-do item updated: {} with new deadline {}", title, deadline)
}
