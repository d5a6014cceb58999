pub mod analytics;
pub mod domain;
pub mod dto;
pub mod error;
pub mod filter;
pub mod query;
pub mod rules;
pub mod time;

pub use analytics::ViewContext;
pub use domain::*;
pub use dto::*;
pub use error::CoreError;
pub use filter::{
    ContactFilter, FilterParseError, InteractionFilter, KindFilter, PriorityFilter,
};
pub use rules::*;
