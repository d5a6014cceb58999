mod ast;
mod parser;

use thiserror::Error;

pub use ast::{ContactFilter, InteractionFilter, KindFilter, PriorityFilter};
pub use parser::{parse_date_window, parse_kind_filter, parse_priority_filter, ALL_TOKEN};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterParseError {
    #[error("invalid priority filter: {0} (expected All|High|Medium|Low)")]
    InvalidPriority(String),
    #[error("invalid interaction type filter: {0}")]
    InvalidKind(String),
    #[error("invalid date window: {0} (expected today|this-week|this-month|all)")]
    InvalidDateWindow(String),
}
