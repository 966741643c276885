//! Build verification screen model
//!
//! A static success banner plus a wall clock refreshed on a fixed period.

use chrono::{DateTime, Local, NaiveDateTime};
use std::time::{Duration, Instant};

/// Banner shown on the verification screen
pub const BANNER: &str = "Verification Success!";

/// Clock format, `yyyy-MM-dd HH:mm:ss`
pub const CLOCK_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Default clock refresh period
pub const DEFAULT_REFRESH: Duration = Duration::from_secs(1);

/// State of the verification screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationScreen {
    banner: String,
    clock: String,
    refresh: Duration,
    last_refresh: Option<Instant>,
}

impl Default for VerificationScreen {
    fn default() -> Self {
        Self::new(DEFAULT_REFRESH)
    }
}

impl VerificationScreen {
    /// Create a screen that refreshes its clock every `refresh`
    pub fn new(refresh: Duration) -> Self {
        Self {
            banner: BANNER.to_string(),
            clock: String::new(),
            refresh,
            last_refresh: None,
        }
    }

    pub fn banner(&self) -> &str {
        &self.banner
    }

    /// Current clock text; empty until the first refresh
    pub fn clock(&self) -> &str {
        &self.clock
    }

    pub fn refresh_period(&self) -> Duration {
        self.refresh
    }

    /// Set the clock text from `now`
    pub fn tick(&mut self, now: NaiveDateTime) {
        self.clock = format_clock(now);
    }

    /// Set the clock text from the local wall clock
    pub fn refresh(&mut self) {
        let now: DateTime<Local> = Local::now();
        self.tick(now.naive_local());
        self.last_refresh = Some(Instant::now());
    }

    /// Refresh when the period has elapsed since the last refresh.
    ///
    /// Returns `true` if a refresh happened.
    pub fn refresh_if_due(&mut self, now: Instant) -> bool {
        let due = match self.last_refresh {
            None => true,
            Some(last) => now.saturating_duration_since(last) >= self.refresh,
        };
        if due {
            self.refresh();
            self.last_refresh = Some(now);
        }
        due
    }
}

/// Format a timestamp the way the verification screen shows it
pub fn format_clock(now: NaiveDateTime) -> String {
    now.format(CLOCK_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 7)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn test_banner_is_static() {
        let screen = VerificationScreen::default();
        assert_eq!(screen.banner(), "Verification Success!");
        assert_eq!(screen.refresh_period(), Duration::from_secs(1));
    }

    #[test]
    fn test_clock_empty_until_first_tick() {
        let mut screen = VerificationScreen::default();
        assert_eq!(screen.clock(), "");

        screen.tick(at(9, 5, 3));
        assert_eq!(screen.clock(), "2024-03-07 09:05:03");
    }

    #[test]
    fn test_format_clock_pads_fields() {
        assert_eq!(format_clock(at(0, 0, 0)), "2024-03-07 00:00:00");
        assert_eq!(format_clock(at(23, 59, 59)), "2024-03-07 23:59:59");
    }

    #[test]
    fn test_refresh_if_due_respects_period() {
        let mut screen = VerificationScreen::new(Duration::from_secs(60));
        let start = Instant::now();

        assert!(screen.refresh_if_due(start));
        assert!(!screen.clock().is_empty());

        // Within the period nothing is refreshed
        assert!(!screen.refresh_if_due(start + Duration::from_secs(1)));
    }
}
