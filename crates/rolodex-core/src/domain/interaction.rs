use crate::domain::ids::{ContactId, InteractionId};
use crate::error::CoreError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub enum InteractionKind {
    #[default]
    Email,
    Call,
    Meeting,
    Text,
    Social,
    Other,
}

impl InteractionKind {
    pub const ALL: [InteractionKind; 6] = [
        InteractionKind::Email,
        InteractionKind::Call,
        InteractionKind::Meeting,
        InteractionKind::Text,
        InteractionKind::Social,
        InteractionKind::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InteractionKind::Email => "Email",
            InteractionKind::Call => "Call",
            InteractionKind::Meeting => "Meeting",
            InteractionKind::Text => "Text",
            InteractionKind::Social => "Social",
            InteractionKind::Other => "Other",
        }
    }
}

impl fmt::Display for InteractionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InteractionKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InteractionKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| CoreError::InvalidInteractionKind(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interaction {
    pub id: InteractionId,
    pub contact_id: ContactId,
    #[serde(rename = "type")]
    pub kind: InteractionKind,
    pub subject: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub date: DateTime<Utc>,
}
