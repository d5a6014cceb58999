use crate::commands::{print_json, Context};
use crate::error::{invalid_input, not_found};
use crate::util::{display_datetime, optional_text, parse_contact_id, parse_interaction_kind};
use anyhow::Result;
use clap::Args;
use rolodex_core::dto::InteractionDto;
use rolodex_core::filter::{parse_date_window, parse_kind_filter, InteractionFilter, ALL_TOKEN};
use rolodex_core::query::{filter_interactions, find_contact, kinds_in_use};
use rolodex_core::time::now_utc;
use rolodex_store::InteractionNew;
use tracing::debug;

#[derive(Debug, Args)]
pub struct AddInteractionArgs {
    pub contact_id: String,
    #[arg(long)]
    pub subject: String,
    #[arg(long = "type", default_value = "Email")]
    pub kind: String,
    #[arg(long)]
    pub notes: Option<String>,
}

#[derive(Debug, Args)]
pub struct ListInteractionsArgs {
    /// Case-insensitive match on contact name, subject or notes
    #[arg(long)]
    pub search: Option<String>,
    #[arg(long = "type", default_value = ALL_TOKEN)]
    pub kind: String,
    /// today | this-week | this-month | all
    #[arg(long, default_value = "all")]
    pub window: String,
}

pub fn add_interaction(ctx: &mut Context<'_>, args: AddInteractionArgs) -> Result<()> {
    let contact_id = parse_contact_id(&args.contact_id)?;
    let kind = parse_interaction_kind(&args.kind)?;
    let subject = args.subject.trim().to_string();
    if subject.is_empty() {
        return Err(invalid_input("subject cannot be empty"));
    }
    if ctx.store.contact(&contact_id).is_none() {
        return Err(not_found(format!("contact {}", contact_id)));
    }

    let interaction = ctx.store.add_interaction(
        now_utc(),
        InteractionNew {
            contact_id,
            kind,
            subject,
            notes: optional_text(args.notes),
        },
    )?;
    debug!(id = %interaction.id, contact = %interaction.contact_id, "interaction logged");

    if ctx.json {
        let contact = ctx.store.contact(&interaction.contact_id);
        print_json(&InteractionDto::new(&interaction, contact))?;
    } else {
        println!("added interaction {}", interaction.id);
    }
    Ok(())
}

pub fn list_interactions(ctx: &Context<'_>, args: ListInteractionsArgs) -> Result<()> {
    let filter = InteractionFilter {
        search: args.search.unwrap_or_default(),
        kind: parse_kind_filter(&args.kind)?,
        window: parse_date_window(&args.window)?,
    };
    let view = ctx.view();
    let contacts = ctx.store.contacts();
    let rows: Vec<InteractionDto> = filter_interactions(
        ctx.store.interactions(),
        contacts,
        &filter,
        view.now,
        view.offset,
    )
    .into_iter()
    .map(|interaction| {
        InteractionDto::new(interaction, find_contact(contacts, &interaction.contact_id))
    })
    .collect();

    if ctx.json {
        print_json(&rows)?;
        return Ok(());
    }

    if rows.is_empty() {
        println!("no interactions");
        return Ok(());
    }

    for row in rows {
        println!(
            "{}  {}  [{}]  {}  {}",
            row.id,
            display_datetime(row.date),
            row.kind,
            row.contact_name,
            row.subject
        );
        if let Some(notes) = row.notes.as_deref().filter(|n| !n.is_empty()) {
            println!("    {}", notes);
        }
    }
    Ok(())
}

pub fn list_kinds(ctx: &Context<'_>) -> Result<()> {
    let kinds = kinds_in_use(ctx.store.interactions());
    if ctx.json {
        print_json(&kinds)?;
        return Ok(());
    }
    for kind in kinds {
        println!("{}", kind);
    }
    Ok(())
}
