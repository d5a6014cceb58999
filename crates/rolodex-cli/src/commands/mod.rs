use anyhow::Result;
use rolodex_config::AppConfig;
use rolodex_core::time::{local_offset, now_utc};
use rolodex_core::ViewContext;
use rolodex_store::{ContactStore, Store};
use serde::Serialize;
use std::io::{self, Write};

pub mod analytics;
pub mod completions;
pub mod contacts;
pub mod dashboard;
pub mod export;
pub mod interactions;

pub struct Context<'a> {
    pub store: &'a mut ContactStore<Store>,
    pub json: bool,
    pub config: &'a AppConfig,
}

impl Context<'_> {
    /// Current clock plus the configured view settings.
    pub fn view(&self) -> ViewContext {
        self.config
            .view_context(ViewContext::new(now_utc(), local_offset()))
    }
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
