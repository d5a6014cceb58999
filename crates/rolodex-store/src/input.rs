use chrono::{DateTime, Utc};
use rolodex_core::domain::{Contact, ContactId, InteractionKind, Priority};

/// Caller-supplied contact fields; the store assigns `id` and `created_at`.
#[derive(Debug, Clone, Default)]
pub struct ContactNew {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub position: String,
    pub relationship: String,
    pub priority: Priority,
    pub tags: Vec<String>,
    pub notes: Option<String>,
    pub last_contact: Option<DateTime<Utc>>,
}

/// Shallow patch: `None` leaves a field untouched.
#[derive(Debug, Clone, Default)]
pub struct ContactUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub position: Option<String>,
    pub relationship: Option<String>,
    pub priority: Option<Priority>,
    pub tags: Option<Vec<String>>,
    pub notes: Option<Option<String>>,
    pub last_contact: Option<Option<DateTime<Utc>>>,
}

impl ContactUpdate {
    pub fn touch(at: DateTime<Utc>) -> Self {
        Self {
            last_contact: Some(Some(at)),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.company.is_none()
            && self.position.is_none()
            && self.relationship.is_none()
            && self.priority.is_none()
            && self.tags.is_none()
            && self.notes.is_none()
            && self.last_contact.is_none()
    }

    pub fn apply(&self, contact: &mut Contact) {
        if let Some(name) = &self.name {
            contact.name = name.clone();
        }
        if let Some(email) = &self.email {
            contact.email = email.clone();
        }
        if let Some(phone) = &self.phone {
            contact.phone = phone.clone();
        }
        if let Some(company) = &self.company {
            contact.company = company.clone();
        }
        if let Some(position) = &self.position {
            contact.position = position.clone();
        }
        if let Some(relationship) = &self.relationship {
            contact.relationship = relationship.clone();
        }
        if let Some(priority) = self.priority {
            contact.priority = priority;
        }
        if let Some(tags) = &self.tags {
            contact.tags = tags.clone();
        }
        if let Some(notes) = &self.notes {
            contact.notes = notes.clone();
        }
        if let Some(last_contact) = self.last_contact {
            contact.last_contact = last_contact;
        }
    }
}

#[derive(Debug, Clone)]
pub struct InteractionNew {
    pub contact_id: ContactId,
    pub kind: InteractionKind,
    pub subject: String,
    pub notes: Option<String>,
}
