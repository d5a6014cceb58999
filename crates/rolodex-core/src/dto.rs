use crate::domain::{Contact, ContactId, Interaction, InteractionId, InteractionKind, Priority};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Shown in place of a contact name when an interaction points nowhere.
pub const UNKNOWN_CONTACT_NAME: &str = "Unknown contact";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactListItemDto {
    pub id: ContactId,
    pub name: String,
    pub email: String,
    pub company: String,
    pub position: String,
    pub priority: Priority,
    pub tags: Vec<String>,
    pub last_contact: DateTime<Utc>,
}

impl From<&Contact> for ContactListItemDto {
    fn from(contact: &Contact) -> Self {
        Self {
            id: contact.id.clone(),
            name: contact.name.clone(),
            email: contact.email.clone(),
            company: contact.company.clone(),
            position: contact.position.clone(),
            priority: contact.priority,
            tags: contact.tags.clone(),
            last_contact: contact.last_contact_or_created(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionDto {
    pub id: InteractionId,
    pub contact_id: ContactId,
    pub contact_name: String,
    pub kind: InteractionKind,
    pub subject: String,
    pub notes: Option<String>,
    pub date: DateTime<Utc>,
}

impl InteractionDto {
    pub fn new(interaction: &Interaction, contact: Option<&Contact>) -> Self {
        Self {
            id: interaction.id.clone(),
            contact_id: interaction.contact_id.clone(),
            contact_name: contact
                .map(|c| c.name.clone())
                .unwrap_or_else(|| UNKNOWN_CONTACT_NAME.to_string()),
            kind: interaction.kind,
            subject: interaction.subject.clone(),
            notes: interaction.notes.clone(),
            date: interaction.date,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetailDto {
    pub contact: Contact,
    pub interactions: Vec<InteractionDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelCountDto {
    pub label: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCountDto {
    pub date: NaiveDate,
    pub label: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardDto {
    pub total_contacts: usize,
    pub interactions_this_week: usize,
    pub high_priority: usize,
    pub follow_ups: usize,
    pub recent_contacts: Vec<ContactListItemDto>,
    pub recent_interactions: Vec<InteractionDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsDto {
    pub total_contacts: usize,
    pub total_interactions: usize,
    pub interactions_this_week: usize,
    pub average_per_day: usize,
    pub by_priority: Vec<LabelCountDto>,
    pub by_kind: Vec<LabelCountDto>,
    pub weekly_trend: Vec<DayCountDto>,
    pub top_companies: Vec<LabelCountDto>,
}
