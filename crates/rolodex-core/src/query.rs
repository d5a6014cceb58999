use crate::domain::{Contact, ContactId, Interaction, InteractionKind};
use crate::dto::{ContactDetailDto, InteractionDto};
use crate::filter::{ContactFilter, InteractionFilter};
use chrono::{DateTime, FixedOffset, Utc};

pub fn find_contact<'a>(contacts: &'a [Contact], id: &ContactId) -> Option<&'a Contact> {
    contacts.iter().find(|contact| &contact.id == id)
}

/// Matching contacts in storage order.
pub fn filter_contacts<'a>(contacts: &'a [Contact], filter: &ContactFilter) -> Vec<&'a Contact> {
    contacts
        .iter()
        .filter(|contact| filter.matches(contact))
        .collect()
}

/// Matching interactions, newest first.
pub fn filter_interactions<'a>(
    interactions: &'a [Interaction],
    contacts: &[Contact],
    filter: &InteractionFilter,
    now: DateTime<Utc>,
    offset: FixedOffset,
) -> Vec<&'a Interaction> {
    let mut matched: Vec<&Interaction> = interactions
        .iter()
        .filter(|interaction| {
            let contact = find_contact(contacts, &interaction.contact_id);
            filter.matches(interaction, contact, now, offset)
        })
        .collect();
    sort_newest_first(&mut matched);
    matched
}

pub fn sort_newest_first(interactions: &mut [&Interaction]) {
    interactions.sort_by(|a, b| b.date.cmp(&a.date));
}

pub fn recent_contacts(contacts: &[Contact], limit: usize) -> Vec<&Contact> {
    let mut sorted: Vec<&Contact> = contacts.iter().collect();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    sorted.truncate(limit);
    sorted
}

pub fn recent_interactions(interactions: &[Interaction], limit: usize) -> Vec<&Interaction> {
    let mut sorted: Vec<&Interaction> = interactions.iter().collect();
    sort_newest_first(&mut sorted);
    sorted.truncate(limit);
    sorted
}

/// The contact together with its own interactions, newest first.
pub fn contact_detail(contact: &Contact, interactions: &[Interaction]) -> ContactDetailDto {
    let mut own: Vec<&Interaction> = interactions
        .iter()
        .filter(|interaction| interaction.contact_id == contact.id)
        .collect();
    sort_newest_first(&mut own);
    ContactDetailDto {
        contact: contact.clone(),
        interactions: own
            .into_iter()
            .map(|interaction| InteractionDto::new(interaction, Some(contact)))
            .collect(),
    }
}

/// Distinct interaction kinds in first-seen order.
pub fn kinds_in_use(interactions: &[Interaction]) -> Vec<InteractionKind> {
    let mut kinds = Vec::new();
    for interaction in interactions {
        if !kinds.contains(&interaction.kind) {
            kinds.push(interaction.kind);
        }
    }
    kinds
}
