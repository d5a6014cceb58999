use chrono::{DateTime, Datelike, Duration, FixedOffset, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::rules::windows::local_date;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

/// The seven local dates of the calendar week containing `now`.
pub fn current_week(now: DateTime<Utc>, offset: FixedOffset, start: WeekStart) -> [NaiveDate; 7] {
    let today = local_date(now, offset);
    let back = match start {
        WeekStart::Sunday => today.weekday().num_days_from_sunday(),
        WeekStart::Monday => today.weekday().num_days_from_monday(),
    };
    let first = today - Duration::days(i64::from(back));
    std::array::from_fn(|index| first + Duration::days(index as i64))
}
