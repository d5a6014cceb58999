use crate::commands::{print_json, Context};
use anyhow::Result;
use rolodex_core::analytics::analytics;
use rolodex_core::dto::LabelCountDto;

pub fn show_analytics(ctx: &Context<'_>) -> Result<()> {
    let view = ctx.view();
    let report = analytics(ctx.store.contacts(), ctx.store.interactions(), &view);

    if ctx.json {
        print_json(&report)?;
        return Ok(());
    }

    println!("contacts: {}", report.total_contacts);
    println!("interactions: {}", report.total_interactions);
    println!("this week: {}", report.interactions_this_week);
    println!("average per day: {}", report.average_per_day);

    print_breakdown("by priority", &report.by_priority);
    print_breakdown("by type", &report.by_kind);

    println!("this week by day:");
    for day in &report.weekly_trend {
        println!("  {} {}  {}", day.label, day.date.format("%m-%d"), day.count);
    }

    print_breakdown("top companies", &report.top_companies);
    Ok(())
}

fn print_breakdown(title: &str, rows: &[LabelCountDto]) {
    println!("{}:", title);
    if rows.is_empty() {
        println!("  none");
    }
    for row in rows {
        println!("  {}  {}", row.label, row.count);
    }
}
