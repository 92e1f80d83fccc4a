//! Commands that print a response body exactly as the API sent it.

use crate::commands::{CommandContext, CommandResult};
use std::io::Write;
use tracing::info;

/// Print a location
pub async fn location<W: Write>(ctx: &CommandContext, location_id: u64, out: &mut W) -> CommandResult {
    let body = ctx.client.location(location_id).await?;
    print_body(&body, out)
}

/// Print all departments
pub async fn departments<W: Write>(ctx: &CommandContext, out: &mut W) -> CommandResult {
    let body = ctx.client.departments().await?;
    print_body(&body, out)
}

/// Print a department
pub async fn department<W: Write>(
    ctx: &CommandContext,
    department_id: u64,
    out: &mut W,
) -> CommandResult {
    let body = ctx.client.department(department_id).await?;
    print_body(&body, out)
}

/// Print all schedules of a location
pub async fn schedules<W: Write>(ctx: &CommandContext, location_id: u64, out: &mut W) -> CommandResult {
    let body = ctx.client.schedules(location_id).await?;
    print_body(&body, out)
}

/// Print the shifts of a schedule
pub async fn shifts<W: Write>(ctx: &CommandContext, schedule_id: u64, out: &mut W) -> CommandResult {
    let body = ctx.client.schedule_shifts(schedule_id).await?;
    print_body(&body, out)
}

/// Print the shifts of the given departments
pub async fn department_shifts<W: Write>(
    ctx: &CommandContext,
    department_ids: &[u64],
    out: &mut W,
) -> CommandResult {
    let body = ctx.client.department_shifts(department_ids).await?;
    print_body(&body, out)
}

fn print_body<W: Write>(body: &[u8], out: &mut W) -> CommandResult {
    info!("Received {} bytes", body.len());
    out.write_all(body)?;
    writeln!(out)?;
    Ok(())
}
