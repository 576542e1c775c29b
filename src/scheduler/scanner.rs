//! Periodic deadline scanner: the only background task in the system.

use crate::config::ReminderConfig;
use crate::notification::dispatcher;
use crate::notification::notification_store::NotificationStore;
use crate::scheduler::policy;
use crate::task::task_store::TaskStore;
use chrono::{Local, NaiveDateTime};
use std::collections::HashMap;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};
use uuid::Uuid;

pub struct DeadlineScanner<T, N> {
    tasks: T,
    notifications: N,
    config: ReminderConfig,
    // Last deadline value a reminder was issued for, per task id. Owned by
    // this scanner alone. An edited deadline no longer matches its entry,
    // so the record self-invalidates; entries for deleted tasks are simply
    // never consulted again.
    sent: HashMap<Uuid, NaiveDateTime>,
}

impl<T: TaskStore, N: NotificationStore> DeadlineScanner<T, N> {
    pub fn new(tasks: T, notifications: N, config: ReminderConfig) -> Self {
        Self {
            tasks,
            notifications,
            config,
            sent: HashMap::new(),
        }
    }

    /// One scan cycle at the given instant. Returns how many reminders were
    /// sent. Per-task failures are logged and skipped; a failed candidate
    /// fetch skips the whole cycle. Nothing here aborts the loop.
    pub async fn scan(&mut self, now: NaiveDateTime) -> usize {
        let candidates = match self.tasks.list_due(now, self.config.window).await {
            Ok(tasks) => tasks,
            Err(e) => {
                warn!(error = %e, "task store unavailable, skipping this cycle");
                return 0;
            }
        };

        let mut sent_count = 0;
        for task in candidates {
            let deadline = match policy::parse_deadline(&task.deadline) {
                Ok(deadline) => deadline,
                Err(e) => {
                    warn!(task_id = %task.id, error = %e, "skipping task this cycle");
                    continue;
                }
            };

            let last_sent = self.sent.get(&task.id).copied();
            if !policy::should_remind(deadline, now, self.config.window, last_sent) {
                continue;
            }

            let message = dispatcher::deadline_reminder(&task.title, deadline);
            match self.notifications.append(task.user_id, &message).await {
                Ok(_) => {
                    // Recorded per task, not batched at end of scan, so a
                    // mid-scan shutdown or later failure cannot lose
                    // already-sent state.
                    self.sent.insert(task.id, deadline);
                    sent_count += 1;
                    info!(task_id = %task.id, user_id = %task.user_id, "deadline reminder sent");
                }
                Err(e) => {
                    warn!(task_id = %task.id, error = %e, "failed to append reminder, will retry next cycle");
                }
            }
        }

        sent_count
    }

    /// Scan loop: one cycle per tick of `scan_period`, until the shutdown
    /// signal fires. The signal is checked before each cycle; an in-flight
    /// cycle always runs to completion first. If the signal's sender is
    /// dropped without ever firing, the loop keeps running detached.
    pub async fn run(mut self, mut shutdown: watch::Receiver<bool>) {
        let mut ticker = tokio::time::interval(self.config.scan_period);
        // Ticks stay anchored at loop start, keeping the period stable when
        // a cycle runs long.
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        info!(
            period_secs = self.config.scan_period.as_secs(),
            window_minutes = self.config.window.num_minutes(),
            "deadline scanner started"
        );

        // Once the sender is gone no stop signal can ever arrive; the arm is
        // disabled instead of letting a closed channel read as shutdown.
        let mut detached = false;
        loop {
            tokio::select! {
                biased;
                changed = shutdown.changed(), if !detached => {
                    match changed {
                        Ok(()) => {
                            if *shutdown.borrow() {
                                info!("deadline scanner stopped");
                                break;
                            }
                        }
                        Err(_) => detached = true,
                    }
                }
                _ = ticker.tick() => {
                    let now = Local::now().naive_local();
                    let sent = self.scan(now).await;
                    debug!(sent, "scan cycle complete");
                }
            }
        }
    }
}

/// Handle to a running scanner; dropping it without calling [`stop`] leaves
/// the scanner running for the life of the runtime.
///
/// [`stop`]: ScannerHandle::stop
pub struct ScannerHandle {
    shutdown: watch::Sender<bool>,
    handle: JoinHandle<()>,
}

impl ScannerHandle {
    /// Cooperative shutdown: signals the loop and waits for it to finish its
    /// current cycle and exit.
    pub async fn stop(self) {
        let _ = self.shutdown.send(true);
        let _ = self.handle.await;
    }
}

/// Spawns the scanner on the current runtime.
pub fn start<T, N>(tasks: T, notifications: N, config: ReminderConfig) -> ScannerHandle
where
    T: TaskStore + 'static,
    N: NotificationStore + 'static,
{
    let (shutdown, rx) = watch::channel(false);
    let scanner = DeadlineScanner::new(tasks, notifications, config);
    let handle = tokio::spawn(scanner.run(rx));

    ScannerHandle { shutdown, handle }
}
