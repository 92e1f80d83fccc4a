use crate::commands::{CommandContext, CommandResult};
use crate::components::staffomatic::DateRange;
use chrono::NaiveDate;
use std::io::Write;
use tracing::info;

/// Print the IDs of a location's schedules between `from` and `until`, one per line
pub async fn schedule_ids<W: Write>(
    ctx: &CommandContext,
    location_id: u64,
    from: NaiveDate,
    until: NaiveDate,
    out: &mut W,
) -> CommandResult {
    let range = DateRange::new(from, until)?;
    let ids = ctx.client.schedule_ids(location_id, &range).await?;

    info!(
        "Found {} schedules for location {} between {} and {}",
        ids.len(),
        location_id,
        from,
        until
    );

    for id in ids {
        writeln!(out, "{}", id)?;
    }
    Ok(())
}
