use chrono::{DateTime, Duration, FixedOffset, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Relative date range used to narrow the interaction log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DateWindow {
    /// Same local calendar day as now.
    Today,
    /// Trailing seven days, both ends inclusive.
    ThisWeek,
    /// Trailing thirty days, both ends inclusive.
    ThisMonth,
    #[default]
    AllTime,
}

pub const WEEK_DAYS: i64 = 7;
pub const MONTH_DAYS: i64 = 30;

impl DateWindow {
    pub fn label(&self) -> &'static str {
        match self {
            DateWindow::Today => "Today",
            DateWindow::ThisWeek => "This Week",
            DateWindow::ThisMonth => "This Month",
            DateWindow::AllTime => "All Time",
        }
    }

    pub fn contains(&self, date: DateTime<Utc>, now: DateTime<Utc>, offset: FixedOffset) -> bool {
        match self {
            DateWindow::Today => local_date(date, offset) == local_date(now, offset),
            DateWindow::ThisWeek => within_trailing_days(date, now, WEEK_DAYS),
            DateWindow::ThisMonth => within_trailing_days(date, now, MONTH_DAYS),
            DateWindow::AllTime => true,
        }
    }
}

pub fn local_date(ts: DateTime<Utc>, offset: FixedOffset) -> NaiveDate {
    ts.with_timezone(&offset).date_naive()
}

/// `now - days <= ts <= now`; future timestamps fall outside.
pub fn within_trailing_days(ts: DateTime<Utc>, now: DateTime<Utc>, days: i64) -> bool {
    let start = now - Duration::days(days);
    ts >= start && ts <= now
}
