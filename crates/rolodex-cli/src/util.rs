use anyhow::Result;
use rolodex_core::domain::{ContactId, InteractionKind, Priority};
use rolodex_core::time::{format_date, format_datetime};
use chrono::{DateTime, Utc};

use crate::error::invalid_input;

pub fn parse_contact_id(raw: &str) -> Result<ContactId> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(invalid_input("contact id cannot be empty"));
    }
    Ok(ContactId::from(trimmed))
}

pub fn parse_priority(raw: &str) -> Result<Priority> {
    Ok(raw.trim().parse::<Priority>()?)
}

pub fn parse_interaction_kind(raw: &str) -> Result<InteractionKind> {
    Ok(raw.trim().parse::<InteractionKind>()?)
}

/// Trims each tag and drops empty entries. Order and duplicates are kept.
pub fn normalize_tags(raw: &[String]) -> Vec<String> {
    raw.iter()
        .flat_map(|value| value.split(','))
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn optional_text(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.trim().is_empty())
}

pub fn display_date(ts: DateTime<Utc>) -> String {
    format_date(ts)
}

pub fn display_datetime(ts: DateTime<Utc>) -> String {
    format_datetime(ts)
}

pub fn tag_suffix(tags: &[String]) -> String {
    if tags.is_empty() {
        return String::new();
    }
    let joined = tags
        .iter()
        .map(|tag| format!("#{}", tag))
        .collect::<Vec<_>>()
        .join(" ");
    format!(" {}", joined)
}
