use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid priority: {0} (expected High|Medium|Low)")]
    InvalidPriority(String),
    #[error("invalid interaction type: {0} (expected Email|Call|Meeting|Text|Social|Other)")]
    InvalidInteractionKind(String),
    #[error("invalid follow-up window: min_days {min} max_days {max}")]
    InvalidFollowUpWindow { min: i64, max: i64 },
}
