use crate::commands::{print_json, Context};
use anyhow::Result;

/// Always JSON, in the persisted record shape.
pub fn export_json(ctx: &Context<'_>) -> Result<()> {
    print_json(&ctx.store.snapshot())
}
