use crate::domain::{Contact, Interaction, InteractionKind, Priority};
use crate::rules::DateWindow;
use chrono::{DateTime, FixedOffset, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriorityFilter {
    #[default]
    All,
    Only(Priority),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KindFilter {
    #[default]
    All,
    Only(InteractionKind),
}

/// Search text plus priority; an empty search matches every contact.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactFilter {
    pub search: String,
    pub priority: PriorityFilter,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InteractionFilter {
    pub search: String,
    pub kind: KindFilter,
    pub window: DateWindow,
}

impl PriorityFilter {
    pub fn matches(&self, priority: Priority) -> bool {
        match self {
            PriorityFilter::All => true,
            PriorityFilter::Only(wanted) => *wanted == priority,
        }
    }
}

impl KindFilter {
    pub fn matches(&self, kind: InteractionKind) -> bool {
        match self {
            KindFilter::All => true,
            KindFilter::Only(wanted) => *wanted == kind,
        }
    }
}

impl ContactFilter {
    pub fn matches(&self, contact: &Contact) -> bool {
        let needle = self.search.to_lowercase();
        let matches_search = contains_folded(&contact.name, &needle)
            || contains_folded(&contact.email, &needle)
            || contains_folded(&contact.company, &needle);
        matches_search && self.priority.matches(contact.priority)
    }
}

impl InteractionFilter {
    /// `contact` is the record `interaction.contact_id` points at, if any.
    pub fn matches(
        &self,
        interaction: &Interaction,
        contact: Option<&Contact>,
        now: DateTime<Utc>,
        offset: FixedOffset,
    ) -> bool {
        let needle = self.search.to_lowercase();
        let matches_search = contact.is_some_and(|c| contains_folded(&c.name, &needle))
            || contains_folded(&interaction.subject, &needle)
            || interaction
                .notes
                .as_deref()
                .is_some_and(|notes| contains_folded(notes, &needle));
        matches_search
            && self.kind.matches(interaction.kind)
            && self.window.contains(interaction.date, now, offset)
    }
}

fn contains_folded(haystack: &str, lowered_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowered_needle)
}
