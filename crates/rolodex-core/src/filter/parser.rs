use crate::domain::{InteractionKind, Priority};
use crate::filter::ast::{KindFilter, PriorityFilter};
use crate::filter::FilterParseError;
use crate::rules::DateWindow;

pub const ALL_TOKEN: &str = "All";

pub fn parse_priority_filter(input: &str) -> Result<PriorityFilter, FilterParseError> {
    let trimmed = input.trim();
    if trimmed == ALL_TOKEN {
        return Ok(PriorityFilter::All);
    }
    trimmed
        .parse::<Priority>()
        .map(PriorityFilter::Only)
        .map_err(|_| FilterParseError::InvalidPriority(trimmed.to_string()))
}

pub fn parse_kind_filter(input: &str) -> Result<KindFilter, FilterParseError> {
    let trimmed = input.trim();
    if trimmed == ALL_TOKEN {
        return Ok(KindFilter::All);
    }
    trimmed
        .parse::<InteractionKind>()
        .map(KindFilter::Only)
        .map_err(|_| FilterParseError::InvalidKind(trimmed.to_string()))
}

/// Accepts the display labels ("This Week") and their kebab-case forms.
pub fn parse_date_window(input: &str) -> Result<DateWindow, FilterParseError> {
    let normalized = input.trim().to_ascii_lowercase().replace(' ', "-");
    match normalized.as_str() {
        "today" => Ok(DateWindow::Today),
        "this-week" => Ok(DateWindow::ThisWeek),
        "this-month" => Ok(DateWindow::ThisMonth),
        "all" | "all-time" => Ok(DateWindow::AllTime),
        _ => Err(FilterParseError::InvalidDateWindow(input.trim().to_string())),
    }
}
