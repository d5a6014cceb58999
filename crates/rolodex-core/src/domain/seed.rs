use crate::domain::contact::{Contact, Priority};
use crate::domain::ids::{ContactId, InteractionId};
use crate::domain::interaction::{Interaction, InteractionKind};
use chrono::{DateTime, TimeZone, Utc};

fn sample_date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .expect("sample dates are valid")
}

/// Records written on first run when storage holds no contacts.
pub fn sample_contacts() -> Vec<Contact> {
    vec![
        Contact {
            id: ContactId::from("1"),
            name: "Sarah Johnson".to_string(),
            email: "sarah.johnson@email.com".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            company: "Tech Solutions Inc.".to_string(),
            position: "Product Manager".to_string(),
            relationship: "Professional".to_string(),
            priority: Priority::High,
            tags: vec!["Client".to_string(), "Tech".to_string()],
            notes: Some(
                "Key contact for the upcoming project. Very responsive and professional."
                    .to_string(),
            ),
            created_at: sample_date(2024, 1, 15),
            last_contact: Some(sample_date(2024, 1, 20)),
        },
        Contact {
            id: ContactId::from("2"),
            name: "Michael Chen".to_string(),
            email: "michael.chen@startup.com".to_string(),
            phone: "+1 (555) 987-6543".to_string(),
            company: "InnovateCorp".to_string(),
            position: "CTO".to_string(),
            relationship: "Professional".to_string(),
            priority: Priority::Medium,
            tags: vec!["Startup".to_string(), "Tech".to_string()],
            notes: Some("Interested in our services. Follow up next month.".to_string()),
            created_at: sample_date(2024, 1, 10),
            last_contact: Some(sample_date(2024, 1, 18)),
        },
    ]
}

/// Records written on first run when storage holds no interactions.
pub fn sample_interactions() -> Vec<Interaction> {
    vec![
        Interaction {
            id: InteractionId::from("1"),
            contact_id: ContactId::from("1"),
            kind: InteractionKind::Email,
            subject: "Project Discussion".to_string(),
            notes: Some("Discussed project requirements and timeline.".to_string()),
            date: sample_date(2024, 1, 20),
        },
        Interaction {
            id: InteractionId::from("2"),
            contact_id: ContactId::from("2"),
            kind: InteractionKind::Call,
            subject: "Initial Consultation".to_string(),
            notes: Some("30-minute call about potential collaboration.".to_string()),
            date: sample_date(2024, 1, 18),
        },
    ]
}
