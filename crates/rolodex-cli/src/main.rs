mod commands;
mod error;
mod util;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use crate::commands::{analytics, completions, contacts, dashboard, export, interactions, Context};
use crate::error::{exit_code_for, report_error};
use rolodex_config as config;
use rolodex_store::{paths, ContactStore, LoadOptions, Store};

#[derive(Debug, Parser)]
#[command(name = "rolodex", version, about = "rolodex contact manager")]
struct Cli {
    #[arg(long, global = true)]
    db_path: Option<PathBuf>,
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[arg(long, global = true)]
    json: bool,
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate shell completions
    Completions(completions::CompletionsArgs),
    #[command(name = "add-contact")]
    AddContact(contacts::AddContactArgs),
    #[command(name = "edit-contact")]
    EditContact(contacts::EditContactArgs),
    Show(contacts::ShowArgs),
    List(contacts::ListArgs),
    Delete(contacts::DeleteArgs),
    #[command(name = "add-interaction")]
    AddInteraction(interactions::AddInteractionArgs),
    Interactions(interactions::ListInteractionsArgs),
    /// Interaction types that appear in the log
    Kinds,
    Dashboard,
    Analytics,
    /// Dump both collections as JSON
    Export,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_logging(verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, verbose);
            exit_code_for(&err)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        db_path,
        config: config_path,
        json,
        verbose,
        command,
    } = cli;

    if let Command::Completions(args) = command {
        return completions::emit(args);
    }

    let app_config = config::load(config_path.clone()).with_context(|| "load config")?;
    if verbose {
        match config::resolve_config_path(config_path) {
            Ok(path) => {
                if path.exists() {
                    debug!(path = %path.display(), "config resolved");
                } else {
                    debug!(path = %path.display(), "config missing, using defaults");
                }
            }
            Err(err) => {
                debug!(error = %err, "config unavailable");
            }
        }
    }

    let db_path = paths::resolve_db_path(db_path).with_context(|| "resolve database path")?;
    debug!(path = %db_path.display(), "database path resolved");

    let store = Store::open(&db_path)
        .with_context(|| format!("open database {}", db_path.display()))?;
    store.migrate().with_context(|| "run migrations")?;

    let mut contact_store = ContactStore::load_with(
        store,
        LoadOptions {
            seed_samples: app_config.seed_samples,
        },
    )
    .with_context(|| "load contacts")?;
    let seeded = contact_store.seeded();
    if seeded.contacts || seeded.interactions {
        debug!(
            contacts = seeded.contacts,
            interactions = seeded.interactions,
            "seeded sample data"
        );
    }

    let mut ctx = Context {
        store: &mut contact_store,
        json,
        config: &app_config,
    };

    match command {
        Command::AddContact(args) => contacts::add_contact(&mut ctx, args),
        Command::EditContact(args) => contacts::edit_contact(&mut ctx, args),
        Command::Show(args) => contacts::show_contact(&ctx, args),
        Command::List(args) => contacts::list_contacts(&ctx, args),
        Command::Delete(args) => contacts::delete_contact(&mut ctx, args),
        Command::AddInteraction(args) => interactions::add_interaction(&mut ctx, args),
        Command::Interactions(args) => interactions::list_interactions(&ctx, args),
        Command::Kinds => interactions::list_kinds(&ctx),
        Command::Dashboard => dashboard::show_dashboard(&ctx),
        Command::Analytics => analytics::show_analytics(&ctx),
        Command::Export => export::export_json(&ctx),
        Command::Completions(_) => {
            unreachable!("completions command handled before store initialization")
        }
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .try_init();
}
