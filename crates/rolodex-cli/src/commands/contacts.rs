use crate::commands::{print_json, Context};
use crate::error::{invalid_input, not_found};
use crate::util::{
    display_date, display_datetime, normalize_tags, optional_text, parse_contact_id,
    parse_priority, tag_suffix,
};
use anyhow::Result;
use clap::{ArgAction, Args};
use rolodex_core::dto::ContactListItemDto;
use rolodex_core::filter::{parse_priority_filter, ContactFilter, ALL_TOKEN};
use rolodex_core::query::{contact_detail, filter_contacts, recent_contacts};
use rolodex_core::time::now_utc;
use rolodex_store::{ContactNew, ContactUpdate};
use tracing::debug;

#[derive(Debug, Args)]
pub struct AddContactArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub company: Option<String>,
    #[arg(long)]
    pub position: Option<String>,
    #[arg(long)]
    pub relationship: Option<String>,
    #[arg(long, default_value = "Medium")]
    pub priority: String,
    #[arg(long, value_name = "TAG")]
    pub tag: Vec<String>,
    #[arg(long)]
    pub notes: Option<String>,
}

#[derive(Debug, Args)]
pub struct EditContactArgs {
    pub id: String,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub company: Option<String>,
    #[arg(long)]
    pub position: Option<String>,
    #[arg(long)]
    pub relationship: Option<String>,
    #[arg(long)]
    pub priority: Option<String>,
    /// Replaces the tag list
    #[arg(long, value_name = "TAG")]
    pub tag: Vec<String>,
    #[arg(long, action = ArgAction::SetTrue, conflicts_with = "tag")]
    pub clear_tags: bool,
    #[arg(long)]
    pub notes: Option<String>,
    #[arg(long, action = ArgAction::SetTrue, conflicts_with = "notes")]
    pub clear_notes: bool,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    pub id: String,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Case-insensitive match on name, email or company
    #[arg(long)]
    pub search: Option<String>,
    #[arg(long, default_value = ALL_TOKEN)]
    pub priority: String,
    /// Most recently added contacts only
    #[arg(long, action = ArgAction::SetTrue)]
    pub recent: bool,
}

#[derive(Debug, Args)]
pub struct DeleteArgs {
    pub id: String,
}

pub fn add_contact(ctx: &mut Context<'_>, args: AddContactArgs) -> Result<()> {
    let name = args.name.trim().to_string();
    if name.is_empty() {
        return Err(invalid_input("contact name cannot be empty"));
    }
    let priority = parse_priority(&args.priority)?;

    let contact = ctx.store.add_contact(
        now_utc(),
        ContactNew {
            name,
            email: args.email.unwrap_or_default(),
            phone: args.phone.unwrap_or_default(),
            company: args.company.unwrap_or_default(),
            position: args.position.unwrap_or_default(),
            relationship: args.relationship.unwrap_or_default(),
            priority,
            tags: normalize_tags(&args.tag),
            notes: optional_text(args.notes),
            last_contact: None,
        },
    )?;
    debug!(id = %contact.id, "contact added");

    if ctx.json {
        print_json(&contact)?;
    } else {
        println!("created {} {}", contact.id, contact.name);
    }
    Ok(())
}

pub fn edit_contact(ctx: &mut Context<'_>, args: EditContactArgs) -> Result<()> {
    let id = parse_contact_id(&args.id)?;

    let mut update = ContactUpdate::default();
    if let Some(name) = args.name {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(invalid_input("contact name cannot be empty"));
        }
        update.name = Some(name);
    }
    update.email = args.email;
    update.phone = args.phone;
    update.company = args.company;
    update.position = args.position;
    update.relationship = args.relationship;
    if let Some(priority) = args.priority {
        update.priority = Some(parse_priority(&priority)?);
    }
    if args.clear_tags {
        update.tags = Some(Vec::new());
    } else if !args.tag.is_empty() {
        update.tags = Some(normalize_tags(&args.tag));
    }
    if args.clear_notes {
        update.notes = Some(None);
    } else if let Some(notes) = args.notes {
        update.notes = Some(optional_text(Some(notes)));
    }

    if update.is_empty() {
        return Err(invalid_input("no updates provided"));
    }

    let contact = ctx
        .store
        .update_contact(&id, update)?
        .ok_or_else(|| not_found(format!("contact {}", id)))?;

    if ctx.json {
        print_json(&contact)?;
    } else {
        println!("updated {} {}", contact.id, contact.name);
    }
    Ok(())
}

pub fn show_contact(ctx: &Context<'_>, args: ShowArgs) -> Result<()> {
    let id = parse_contact_id(&args.id)?;
    let contact = ctx
        .store
        .contact(&id)
        .ok_or_else(|| not_found(format!("contact {}", id)))?;
    let detail = contact_detail(contact, ctx.store.interactions());

    if ctx.json {
        print_json(&detail)?;
        return Ok(());
    }

    let contact = &detail.contact;
    println!("id: {}", contact.id);
    println!("name: {}", contact.name);
    for (label, value) in [
        ("email", &contact.email),
        ("phone", &contact.phone),
        ("company", &contact.company),
        ("position", &contact.position),
        ("relationship", &contact.relationship),
    ] {
        if !value.is_empty() {
            println!("{}: {}", label, value);
        }
    }
    println!("priority: {}", contact.priority);
    if !contact.tags.is_empty() {
        println!("tags:{}", tag_suffix(&contact.tags));
    }
    if let Some(notes) = contact.notes.as_deref().filter(|n| !n.is_empty()) {
        println!("notes: {}", notes);
    }
    println!("created: {}", display_date(contact.created_at));
    println!(
        "last contact: {}",
        display_date(contact.last_contact_or_created())
    );

    if detail.interactions.is_empty() {
        println!("interactions: none");
    } else {
        println!("interactions:");
        for interaction in &detail.interactions {
            println!(
                "  {} [{}] {}",
                display_datetime(interaction.date),
                interaction.kind,
                interaction.subject
            );
        }
    }

    Ok(())
}

pub fn list_contacts(ctx: &Context<'_>, args: ListArgs) -> Result<()> {
    let filter = ContactFilter {
        search: args.search.unwrap_or_default(),
        priority: parse_priority_filter(&args.priority)?,
    };

    let contacts = ctx.store.contacts();
    let matched = if args.recent {
        recent_contacts(contacts, ctx.config.recent_limit)
            .into_iter()
            .filter(|contact| filter.matches(contact))
            .collect()
    } else {
        filter_contacts(contacts, &filter)
    };
    let items: Vec<ContactListItemDto> = matched
        .into_iter()
        .map(ContactListItemDto::from)
        .collect();

    if ctx.json {
        print_json(&items)?;
        return Ok(());
    }

    if items.is_empty() {
        println!("no contacts");
        return Ok(());
    }

    for item in items {
        let company = if item.company.is_empty() {
            "-".to_string()
        } else {
            item.company.clone()
        };
        println!(
            "{}  {}  {}  [{}]  {}{}",
            item.id,
            item.name,
            company,
            item.priority,
            display_date(item.last_contact),
            tag_suffix(&item.tags)
        );
    }

    Ok(())
}

pub fn delete_contact(ctx: &mut Context<'_>, args: DeleteArgs) -> Result<()> {
    let id = parse_contact_id(&args.id)?;
    if !ctx.store.delete_contact(&id)? {
        return Err(not_found(format!("contact {}", id)));
    }
    debug!(id = %id, "contact deleted with its interactions");
    if ctx.json {
        print_json(&serde_json::json!({ "id": id }))?;
    } else {
        println!("deleted {}", id);
    }
    Ok(())
}
