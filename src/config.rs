use chrono::Duration;

#[derive(Debug, Clone)]
pub struct ReminderConfig {
    /// Reminder window W: how far ahead of a deadline a reminder may fire.
    pub window: Duration,
    /// Scan period P: interval between scanner wake-ups.
    pub scan_period: std::time::Duration,
}

impl Default for ReminderConfig {
    fn default() -> Self {
        Self {
            window: Duration::minutes(10),
            scan_period: std::time::Duration::from_secs(60),
        }
    }
}

impl ReminderConfig {
    pub fn from_env() -> Self {
        let window_minutes: i64 = std::env::var("REMINDER_WINDOW_MINUTES")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .expect("REMINDER_WINDOW_MINUTES must be a number");
        let scan_seconds: u64 = std::env::var("SCAN_PERIOD_SECONDS")
            .unwrap_or_else(|_| "60".to_string())
            .parse()
            .expect("SCAN_PERIOD_SECONDS must be a number");

        Self {
            window: Duration::minutes(window_minutes),
            scan_period: std::time::Duration::from_secs(scan_seconds),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_ten_minutes_and_sixty_seconds() {
        let config = ReminderConfig::default();
        assert_eq!(config.window, Duration::minutes(10));
        assert_eq!(config.scan_period, std::time::Duration::from_secs(60));
    }
}
