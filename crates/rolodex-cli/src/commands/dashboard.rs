use crate::commands::{print_json, Context};
use crate::util::{display_date, display_datetime};
use anyhow::Result;
use rolodex_core::analytics::dashboard;

pub fn show_dashboard(ctx: &Context<'_>) -> Result<()> {
    let view = ctx.view();
    let summary = dashboard(ctx.store.contacts(), ctx.store.interactions(), &view);

    if ctx.json {
        print_json(&summary)?;
        return Ok(());
    }

    println!("contacts: {}", summary.total_contacts);
    println!("interactions this week: {}", summary.interactions_this_week);
    println!("high priority: {}", summary.high_priority);
    println!("need follow-up: {}", summary.follow_ups);

    println!("recent contacts:");
    if summary.recent_contacts.is_empty() {
        println!("  none");
    }
    for contact in &summary.recent_contacts {
        println!(
            "  {}  {}  [{}]  {}",
            contact.id,
            contact.name,
            contact.priority,
            display_date(contact.last_contact)
        );
    }

    println!("recent interactions:");
    if summary.recent_interactions.is_empty() {
        println!("  none");
    }
    for interaction in &summary.recent_interactions {
        println!(
            "  {}  [{}]  {}  {}",
            display_datetime(interaction.date),
            interaction.kind,
            interaction.contact_name,
            interaction.subject
        );
    }
    Ok(())
}
