use chrono::{Duration, TimeZone, Utc};
use rolodex_core::domain::{ContactId, Priority};
use rolodex_store::{ContactNew, ContactStore, ContactUpdate, MemoryStorage};

fn ada() -> ContactNew {
    ContactNew {
        name: "Ada Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        phone: "+44 20 0000 0000".to_string(),
        company: "Analytical Engines".to_string(),
        position: "Programmer".to_string(),
        relationship: "Professional".to_string(),
        priority: Priority::High,
        tags: vec!["Math".to_string(), "Math".to_string(), "Pioneer".to_string()],
        notes: Some("First program.".to_string()),
        last_contact: None,
    }
}

#[test]
fn add_contact_assigns_unique_ids_and_creation_time() {
    let mut store = ContactStore::load(MemoryStorage::new()).expect("load");
    let now = Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap();

    let mut ids = Vec::new();
    for offset in 0..20 {
        let call_time = now + Duration::seconds(offset);
        let contact = store.add_contact(call_time, ada()).expect("add contact");
        assert!(contact.created_at >= call_time);
        ids.push(contact.id);
    }

    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 20);
    assert!(ids
        .iter()
        .all(|id| id.as_str() != "1" && id.as_str() != "2"));
    assert_eq!(store.contacts().len(), 22);
}

#[test]
fn add_contact_copies_fields_verbatim() {
    let mut store = ContactStore::load(MemoryStorage::new()).expect("load");
    let now = Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap();
    let contact = store.add_contact(now, ada()).expect("add contact");

    assert_eq!(contact.tags, vec!["Math", "Math", "Pioneer"]);
    assert_eq!(contact.notes.as_deref(), Some("First program."));
    assert_eq!(contact.last_contact, None);
    assert_eq!(store.contacts().last(), Some(&contact));
}

#[test]
fn duplicate_emails_are_allowed() {
    let mut store = ContactStore::load(MemoryStorage::new()).expect("load");
    let now = Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap();
    store.add_contact(now, ada()).expect("first");
    store.add_contact(now, ada()).expect("second");
    let matches = store
        .contacts()
        .iter()
        .filter(|c| c.email == "ada@example.com")
        .count();
    assert_eq!(matches, 2);
}

#[test]
fn update_contact_changes_only_given_field() {
    let mut store = ContactStore::load(MemoryStorage::new()).expect("load");
    let now = Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap();
    let original = store.add_contact(now, ada()).expect("add contact");

    let updated = store
        .update_contact(
            &original.id,
            ContactUpdate {
                position: Some("Countess".to_string()),
                ..Default::default()
            },
        )
        .expect("update")
        .expect("contact exists");

    let mut expected = original.clone();
    expected.position = "Countess".to_string();
    assert_eq!(updated, expected);
    assert_eq!(store.contact(&original.id), Some(&expected));
}

#[test]
fn update_unknown_contact_is_a_no_op() {
    let mut store = ContactStore::load(MemoryStorage::new()).expect("load");
    let before = store.snapshot();
    let result = store
        .update_contact(
            &ContactId::from("missing"),
            ContactUpdate {
                name: Some("Nobody".to_string()),
                ..Default::default()
            },
        )
        .expect("update");
    assert!(result.is_none());
    assert_eq!(store.snapshot(), before);
}

#[test]
fn delete_unknown_contact_is_a_no_op() {
    let mut store = ContactStore::load(MemoryStorage::new()).expect("load");
    let before = store.snapshot();
    assert!(!store
        .delete_contact(&ContactId::from("missing"))
        .expect("delete"));
    assert_eq!(store.snapshot(), before);
}

#[test]
fn deleting_last_contact_persists_empty_collection() {
    let mut store = ContactStore::load(MemoryStorage::new()).expect("load");
    let ids: Vec<ContactId> = store.contacts().iter().map(|c| c.id.clone()).collect();
    for id in &ids {
        assert!(store.delete_contact(id).expect("delete"));
    }

    let reloaded = ContactStore::load(store.into_storage()).expect("reload");
    assert!(reloaded.contacts().is_empty());
    assert!(reloaded.interactions().is_empty());
    assert!(!reloaded.seeded().contacts);
}
