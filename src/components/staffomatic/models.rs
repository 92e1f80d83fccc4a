use chrono::{DateTime, FixedOffset};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Identifier of an API record; the API sends numbers but strings are accepted too
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{}", n),
            RecordId::Text(s) => f.write_str(s),
        }
    }
}

/// Records that carry an `id`
pub trait Identified {
    fn id(&self) -> &RecordId;
}

/// Decode a field if it has the expected shape, `None` otherwise.
///
/// Used for fields that ride along with a record so that an odd value never
/// costs the whole record.
fn tolerant<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// The authenticated account (`account.json`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    #[serde(default, deserialize_with = "tolerant")]
    pub id: Option<RecordId>,
    #[serde(default, deserialize_with = "tolerant")]
    pub name: Option<String>,
    /// IANA zone name, e.g. `Europe/London`
    #[serde(default, deserialize_with = "tolerant")]
    pub time_zone: Option<String>,
}

/// A schedule (rota) of a location.
///
/// Only `id` is required; the other fields decode to `None` when absent or
/// shaped differently. `bop`/`eop` are the beginning and end of the period the
/// schedule covers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schedule {
    pub id: RecordId,
    #[serde(default, deserialize_with = "tolerant")]
    pub location_id: Option<RecordId>,
    #[serde(default, deserialize_with = "tolerant")]
    pub bop: Option<DateTime<FixedOffset>>,
    #[serde(default, deserialize_with = "tolerant")]
    pub eop: Option<DateTime<FixedOffset>>,
    #[serde(default, deserialize_with = "tolerant")]
    pub state: Option<String>,
}

impl Identified for Schedule {
    fn id(&self) -> &RecordId {
        &self.id
    }
}
