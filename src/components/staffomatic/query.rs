use crate::error::{Error, StaffoResult};
use chrono::NaiveDate;
use url::Url;

/// UTC offset stamped on both range bounds.
///
/// This is fixed and ignores the account's zone and daylight saving, so ranges
/// crossing a DST change are not calendar-exact.
pub const RANGE_OFFSET: &str = "+01:00";

const START_OF_DAY: &str = "00:00:00";
const END_OF_DAY: &str = "23:59:59";

/// Inclusive range of calendar days used for schedule queries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Create a range, rejecting `start > end`
    pub fn new(start: NaiveDate, end: NaiveDate) -> StaffoResult<Self> {
        if start > end {
            return Err(Error::InvalidDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Lower bound, e.g. `2020-07-27T00:00:00+01:00`
    pub fn from_timestamp(&self) -> String {
        stamp(self.start, START_OF_DAY)
    }

    /// Upper bound, e.g. `2020-08-02T23:59:59+01:00`
    pub fn until_timestamp(&self) -> String {
        stamp(self.end, END_OF_DAY)
    }

    /// The `from` and `until` query parameters, in that order
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("from", self.from_timestamp()),
            ("until", self.until_timestamp()),
        ]
    }
}

fn stamp(date: NaiveDate, time: &str) -> String {
    format!("{}T{}{}", date.format("%Y-%m-%d"), time, RANGE_OFFSET)
}

/// One `department_ids[]` parameter per department, in the given order
pub fn department_query(department_ids: &[u64]) -> Vec<(&'static str, String)> {
    department_ids
        .iter()
        .map(|id| ("department_ids[]", id.to_string()))
        .collect()
}

/// Parse `url` and append `pairs` form-urlencoded (`+` becomes `%2B`)
pub fn with_query<I>(url: &str, pairs: I) -> StaffoResult<Url>
where
    I: IntoIterator<Item = (&'static str, String)>,
{
    let mut url = Url::parse(url)?;
    let pairs: Vec<_> = pairs.into_iter().collect();

    // query_pairs_mut leaves a bare `?` behind even when nothing is appended
    if !pairs.is_empty() {
        let mut query = url.query_pairs_mut();
        for (key, value) in &pairs {
            query.append_pair(key, value);
        }
    }

    Ok(url)
}
