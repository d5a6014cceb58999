pub mod follow_up;
pub mod week;
pub mod windows;

pub use follow_up::FollowUpWindow;
pub use week::{current_week, WeekStart};
pub use windows::{local_date, within_trailing_days, DateWindow, MONTH_DAYS, WEEK_DAYS};
