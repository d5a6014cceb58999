use crate::error::{Result, StoreError};
use crate::input::{ContactNew, ContactUpdate, InteractionNew};
use crate::storage::Storage;
use chrono::{DateTime, Utc};
use rolodex_core::domain::{
    sample_contacts, sample_interactions, Contact, ContactId, Interaction, InteractionId,
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

pub const CONTACTS_KEY: &str = "crm-contacts";
pub const INTERACTIONS_KEY: &str = "crm-interactions";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    /// Write the built-in sample records when a collection has never been stored.
    pub seed_samples: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self { seed_samples: true }
    }
}

/// Which collections were filled from the samples during load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Seeded {
    pub contacts: bool,
    pub interactions: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub contacts: Vec<Contact>,
    pub interactions: Vec<Interaction>,
}

/// Contacts and interactions held in memory and written through to storage
/// after every change.
///
/// A value only exists after a successful load, so every later write is a
/// real state change and may legitimately store an empty collection.
pub struct ContactStore<S: Storage> {
    storage: S,
    contacts: Vec<Contact>,
    interactions: Vec<Interaction>,
    seeded: Seeded,
}

impl<S: Storage> ContactStore<S> {
    pub fn load(storage: S) -> Result<Self> {
        Self::load_with(storage, LoadOptions::default())
    }

    pub fn load_with(mut storage: S, options: LoadOptions) -> Result<Self> {
        let mut seeded = Seeded::default();

        let contacts = match read_collection::<_, Contact>(&storage, CONTACTS_KEY)? {
            Some(contacts) => contacts,
            None => {
                let initial = if options.seed_samples {
                    sample_contacts()
                } else {
                    Vec::new()
                };
                let encoded = encode(CONTACTS_KEY, &initial)?;
                storage.write(CONTACTS_KEY, &encoded)?;
                seeded.contacts = options.seed_samples;
                initial
            }
        };

        let interactions = match read_collection::<_, Interaction>(&storage, INTERACTIONS_KEY)? {
            Some(interactions) => interactions,
            None => {
                let initial = if options.seed_samples {
                    sample_interactions()
                } else {
                    Vec::new()
                };
                let encoded = encode(INTERACTIONS_KEY, &initial)?;
                storage.write(INTERACTIONS_KEY, &encoded)?;
                seeded.interactions = options.seed_samples;
                initial
            }
        };

        Ok(Self {
            storage,
            contacts,
            interactions,
            seeded,
        })
    }

    pub fn seeded(&self) -> Seeded {
        self.seeded
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn interactions(&self) -> &[Interaction] {
        &self.interactions
    }

    pub fn contact(&self, id: &ContactId) -> Option<&Contact> {
        self.contacts.iter().find(|contact| &contact.id == id)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            contacts: self.contacts.clone(),
            interactions: self.interactions.clone(),
        }
    }

    pub fn add_contact(&mut self, now: DateTime<Utc>, input: ContactNew) -> Result<Contact> {
        let contact = Contact {
            id: self.fresh_contact_id(),
            name: input.name,
            email: input.email,
            phone: input.phone,
            company: input.company,
            position: input.position,
            relationship: input.relationship,
            priority: input.priority,
            tags: input.tags,
            notes: input.notes,
            created_at: now,
            last_contact: input.last_contact,
        };

        let mut contacts = self.contacts.clone();
        contacts.push(contact.clone());
        self.commit(Some(contacts), None)?;
        Ok(contact)
    }

    /// Returns `None`, leaving storage untouched, when `id` is unknown.
    pub fn update_contact(
        &mut self,
        id: &ContactId,
        update: ContactUpdate,
    ) -> Result<Option<Contact>> {
        let Some(contacts) = patched(&self.contacts, id, &update) else {
            return Ok(None);
        };
        let updated = contacts.iter().find(|contact| &contact.id == id).cloned();
        self.commit(Some(contacts), None)?;
        Ok(updated)
    }

    /// Removes the contact together with its interactions. Returns `false`
    /// when `id` is unknown.
    pub fn delete_contact(&mut self, id: &ContactId) -> Result<bool> {
        if self.contact(id).is_none() {
            return Ok(false);
        }

        let contacts: Vec<Contact> = self
            .contacts
            .iter()
            .filter(|contact| &contact.id != id)
            .cloned()
            .collect();
        let interactions: Vec<Interaction> = self
            .interactions
            .iter()
            .filter(|interaction| &interaction.contact_id != id)
            .cloned()
            .collect();
        self.commit(Some(contacts), Some(interactions))?;
        Ok(true)
    }

    /// Records an interaction dated `now` and stamps the contact's
    /// `last_contact`. Unknown contact ids are accepted; no contact changes.
    pub fn add_interaction(
        &mut self,
        now: DateTime<Utc>,
        input: InteractionNew,
    ) -> Result<Interaction> {
        let interaction = Interaction {
            id: self.fresh_interaction_id(),
            contact_id: input.contact_id,
            kind: input.kind,
            subject: input.subject,
            notes: input.notes,
            date: now,
        };

        let mut interactions = self.interactions.clone();
        interactions.push(interaction.clone());
        let contacts = patched(
            &self.contacts,
            &interaction.contact_id,
            &ContactUpdate::touch(now),
        );
        self.commit(contacts, Some(interactions))?;
        Ok(interaction)
    }

    /// Interactions for `contact_id` in storage order.
    pub fn get_contact_interactions(&self, contact_id: &ContactId) -> Vec<&Interaction> {
        self.interactions
            .iter()
            .filter(|interaction| &interaction.contact_id == contact_id)
            .collect()
    }

    fn fresh_contact_id(&self) -> ContactId {
        loop {
            let id = ContactId::generate();
            if self.contact(&id).is_none() {
                return id;
            }
        }
    }

    fn fresh_interaction_id(&self) -> InteractionId {
        loop {
            let id = InteractionId::generate();
            if !self.interactions.iter().any(|interaction| interaction.id == id) {
                return id;
            }
        }
    }

    // Storage is written before memory is swapped, so a failed write leaves
    // both sides on the previous state.
    fn commit(
        &mut self,
        contacts: Option<Vec<Contact>>,
        interactions: Option<Vec<Interaction>>,
    ) -> Result<()> {
        let encoded_contacts = contacts
            .as_ref()
            .map(|items| encode(CONTACTS_KEY, items))
            .transpose()?;
        let encoded_interactions = interactions
            .as_ref()
            .map(|items| encode(INTERACTIONS_KEY, items))
            .transpose()?;

        let mut batch: Vec<(&str, &str)> = Vec::with_capacity(2);
        if let Some(value) = encoded_contacts.as_deref() {
            batch.push((CONTACTS_KEY, value));
        }
        if let Some(value) = encoded_interactions.as_deref() {
            batch.push((INTERACTIONS_KEY, value));
        }
        if batch.is_empty() {
            return Ok(());
        }
        self.storage.write_batch(&batch)?;

        if let Some(contacts) = contacts {
            self.contacts = contacts;
        }
        if let Some(interactions) = interactions {
            self.interactions = interactions;
        }
        Ok(())
    }
}

fn patched(contacts: &[Contact], id: &ContactId, update: &ContactUpdate) -> Option<Vec<Contact>> {
    let index = contacts.iter().position(|contact| &contact.id == id)?;
    let mut next = contacts.to_vec();
    update.apply(&mut next[index]);
    Some(next)
}

fn read_collection<S: Storage, T: DeserializeOwned>(
    storage: &S,
    key: &str,
) -> Result<Option<Vec<T>>> {
    let Some(raw) = storage.read(key)? else {
        return Ok(None);
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|source| StoreError::Corrupt {
            key: key.to_string(),
            source,
        })
}

fn encode<T: Serialize>(key: &str, items: &[T]) -> Result<String> {
    serde_json::to_string(items).map_err(|source| StoreError::Encode {
        key: key.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::{ContactStore, LoadOptions, CONTACTS_KEY, INTERACTIONS_KEY};
    use crate::error::{Result, StoreError};
    use crate::input::ContactNew;
    use crate::storage::{MemoryStorage, Storage};
    use chrono::{TimeZone, Utc};
    use std::io;

    struct FailingWrites {
        inner: MemoryStorage,
        fail: bool,
    }

    impl Storage for FailingWrites {
        fn read(&self, key: &str) -> Result<Option<String>> {
            self.inner.read(key)
        }

        fn write_batch(&mut self, entries: &[(&str, &str)]) -> Result<()> {
            if self.fail {
                return Err(StoreError::Io(io::Error::new(io::ErrorKind::Other, "disk full")));
            }
            self.inner.write_batch(entries)
        }
    }

    #[test]
    fn failed_write_keeps_memory_unchanged() {
        let storage = FailingWrites {
            inner: MemoryStorage::new(),
            fail: false,
        };
        let mut store = ContactStore::load(storage).expect("load");
        store.storage.fail = true;

        let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let result = store.add_contact(
            now,
            ContactNew {
                name: "X".to_string(),
                ..Default::default()
            },
        );
        assert!(result.is_err());
        assert_eq!(store.contacts().len(), 2);
    }

    #[test]
    fn disabled_seeding_writes_empty_arrays() {
        let store = ContactStore::load_with(
            MemoryStorage::new(),
            LoadOptions {
                seed_samples: false,
            },
        )
        .expect("load");
        assert!(store.contacts().is_empty());
        assert!(!store.seeded().contacts);
        assert_eq!(store.storage().get(CONTACTS_KEY), Some("[]"));
        assert_eq!(store.storage().get(INTERACTIONS_KEY), Some("[]"));
    }
}
