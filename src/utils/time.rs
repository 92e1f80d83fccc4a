use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use thiserror::Error;

/// Marker printed in place of a clock reading when the zone cannot be loaded
pub const TIME_UNKNOWN: &str = "<time unknown>";

/// A zone name that could not be resolved, together with the instant that was
/// being converted
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown time zone `{zone}`")]
pub struct UnresolvedZone {
    pub instant: DateTime<Utc>,
    pub zone: String,
}

/// Express `instant` in the IANA zone called `zone`, e.g. `Europe/London`
pub fn time_in(instant: DateTime<Utc>, zone: &str) -> Result<DateTime<Tz>, UnresolvedZone> {
    match zone.parse::<Tz>() {
        Ok(tz) => Ok(instant.with_timezone(&tz)),
        Err(_) => Err(UnresolvedZone {
            instant,
            zone: zone.to_string(),
        }),
    }
}

/// Render the wall clock of `zone` at `instant` as `"<zone> HH:MM"`.
///
/// An unknown zone renders as `"<zone> <time unknown>"` instead of failing.
pub fn clock_in(instant: DateTime<Utc>, zone: &str) -> String {
    match time_in(instant, zone) {
        Ok(local) => format!("{} {}", local.timezone().name(), local.format("%H:%M")),
        Err(unresolved) => format!("{} {}", unresolved.zone, TIME_UNKNOWN),
    }
}
