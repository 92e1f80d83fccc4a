use crate::commands::{CommandContext, CommandResult};
use crate::utils::time::{clock_in, TIME_UNKNOWN};
use chrono::{DateTime, Utc};
use std::io::Write;
use tracing::warn;

/// Stands in for the zone name when the account does not carry one
pub const MISSING_ZONE: &str = "<nil>";

/// Print `now` on the wall clock of the account's time zone.
///
/// An unknown or missing zone prints `"<zone> <time unknown>"` instead of
/// failing, with `<nil>` standing in for a missing zone.
pub async fn time_zone<W: Write>(ctx: &CommandContext, now: DateTime<Utc>, out: &mut W) -> CommandResult {
    let zone = ctx
        .client
        .account()
        .await?
        .and_then(|account| account.time_zone)
        .filter(|zone| !zone.is_empty());

    match zone {
        Some(zone) => writeln!(out, "{}", clock_in(now, &zone))?,
        None => {
            warn!("Account has no time zone");
            writeln!(out, "{} {}", MISSING_ZONE, TIME_UNKNOWN)?
        }
    }

    Ok(())
}
