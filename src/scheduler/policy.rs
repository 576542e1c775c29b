//! Pure reminder decision logic, kept free of store and clock access so it
//! can be tested exhaustively.

use crate::error::{AppError, Result};
use chrono::{Duration, NaiveDateTime};

/// Parses the deadline text carried on a task record. Accepts the frontend's
/// `YYYY-MM-DDTHH:MM` shape, with seconds tolerated.
pub fn parse_deadline(raw: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S"))
        .map_err(|source| AppError::MalformedDeadline {
            value: raw.to_string(),
            source,
        })
}

/// Whether a reminder is due for a task with the given parsed deadline.
///
/// Fires only inside the half-open window `(now, now + window]`: a deadline
/// exactly at `now` (or in the past) never fires, one exactly at the window's
/// far edge does. `last_sent` is the deadline value the last reminder for
/// this task was issued for; comparing values rather than a sent flag lets an
/// edited deadline re-arm the task without any edit hook.
pub fn should_remind(
    deadline: NaiveDateTime,
    now: NaiveDateTime,
    window: Duration,
    last_sent: Option<NaiveDateTime>,
) -> bool {
    deadline > now && deadline <= now + window && last_sent != Some(deadline)
}
