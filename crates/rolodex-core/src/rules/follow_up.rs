use crate::domain::Contact;
use crate::error::CoreError;
use chrono::{DateTime, Duration, Utc};

pub const MAX_FOLLOW_UP_DAYS: i64 = 3650;
pub const DEFAULT_FOLLOW_UP_MIN_DAYS: i64 = 7;
pub const DEFAULT_FOLLOW_UP_MAX_DAYS: i64 = 14;

/// Contacts last reached strictly between `max_days` and `min_days` ago are
/// due for a follow-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FollowUpWindow {
    min_days: i64,
    max_days: i64,
}

impl Default for FollowUpWindow {
    fn default() -> Self {
        Self {
            min_days: DEFAULT_FOLLOW_UP_MIN_DAYS,
            max_days: DEFAULT_FOLLOW_UP_MAX_DAYS,
        }
    }
}

impl FollowUpWindow {
    pub fn new(min_days: i64, max_days: i64) -> Result<Self, CoreError> {
        if min_days <= 0 || max_days <= min_days || max_days > MAX_FOLLOW_UP_DAYS {
            return Err(CoreError::InvalidFollowUpWindow {
                min: min_days,
                max: max_days,
            });
        }
        Ok(Self { min_days, max_days })
    }

    pub fn min_days(&self) -> i64 {
        self.min_days
    }

    pub fn max_days(&self) -> i64 {
        self.max_days
    }

    pub fn contains(&self, last_contact: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        let oldest = now - Duration::days(self.max_days);
        let newest = now - Duration::days(self.min_days);
        last_contact > oldest && last_contact < newest
    }

    pub fn needs_follow_up(&self, contact: &Contact, now: DateTime<Utc>) -> bool {
        self.contains(contact.last_contact_or_created(), now)
    }
}

#[cfg(test)]
mod tests {
    use super::FollowUpWindow;
    use chrono::{Duration, TimeZone, Utc};

    #[test]
    fn default_window_is_one_to_two_weeks() {
        let now = Utc.with_ymd_and_hms(2024, 6, 10, 12, 0, 0).unwrap();
        let window = FollowUpWindow::default();
        assert!(window.contains(now - Duration::days(10), now));
        assert!(!window.contains(now - Duration::days(3), now));
        assert!(!window.contains(now - Duration::days(20), now));
    }

    #[test]
    fn bounds_are_exclusive() {
        let now = Utc.with_ymd_and_hms(2024, 6, 10, 12, 0, 0).unwrap();
        let window = FollowUpWindow::default();
        assert!(!window.contains(now - Duration::days(7), now));
        assert!(!window.contains(now - Duration::days(14), now));
    }

    #[test]
    fn rejects_inverted_window() {
        assert!(FollowUpWindow::new(14, 7).is_err());
        assert!(FollowUpWindow::new(0, 7).is_err());
        assert!(FollowUpWindow::new(3, 4000).is_err());
        assert!(FollowUpWindow::new(3, 5).is_ok());
    }
}
