pub mod fetcher;
pub mod models;
pub mod projector;
pub mod query;
pub mod request;

pub use fetcher::{Fetch, HttpFetcher, DEFAULT_TIMEOUT};
pub use models::{Account, RecordId, Schedule};
pub use projector::DecodeMode;
pub use query::DateRange;

use crate::config::Config;
use crate::error::StaffoResult;
use request::{build_request_url, paths};
use std::fmt;
use std::sync::Arc;
use tracing::info;

/// Client for the Staffomatic REST API.
///
/// Every call is a single sequential GET; nothing is cached between calls.
#[derive(Clone)]
pub struct StaffoClient {
    config: Arc<Config>,
    fetcher: Arc<dyn Fetch>,
    decode_mode: DecodeMode,
}

impl fmt::Debug for StaffoClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaffoClient")
            .field("config", &self.config)
            .field("decode_mode", &self.decode_mode)
            .finish()
    }
}

impl StaffoClient {
    /// Create a client talking HTTP with the default timeout
    pub fn new(config: Arc<Config>) -> StaffoResult<Self> {
        let fetcher = HttpFetcher::new(&config)?;
        Ok(Self::with_fetcher(config, Arc::new(fetcher)))
    }

    /// Create a client on top of an arbitrary fetcher
    pub fn with_fetcher(config: Arc<Config>, fetcher: Arc<dyn Fetch>) -> Self {
        let decode_mode = DecodeMode::from_strict(config.strict_decode);
        Self {
            config,
            fetcher,
            decode_mode,
        }
    }

    /// Override the decode mode taken from the config
    pub fn with_decode_mode(mut self, decode_mode: DecodeMode) -> Self {
        self.decode_mode = decode_mode;
        self
    }

    pub fn decode_mode(&self) -> DecodeMode {
        self.decode_mode
    }

    /// Absolute URL of a resource suffix
    pub fn url(&self, suffix: &str) -> String {
        build_request_url(&self.config.hostname, &self.config.subdomain, suffix)
    }

    /// GET a resource suffix and return the body untouched
    pub async fn fetch_raw(&self, suffix: &str) -> StaffoResult<Vec<u8>> {
        self.fetcher.get(&self.url(suffix)).await
    }

    /// The account; `None` when the body cannot be decoded in lenient mode
    pub async fn account(&self) -> StaffoResult<Option<Account>> {
        let body = self.fetch_raw(paths::ACCOUNT).await?;
        projector::decode_object(&body, self.decode_mode)
    }

    pub async fn location(&self, location_id: u64) -> StaffoResult<Vec<u8>> {
        self.fetch_raw(&paths::location(location_id)).await
    }

    pub async fn departments(&self) -> StaffoResult<Vec<u8>> {
        self.fetch_raw(paths::DEPARTMENTS).await
    }

    pub async fn department(&self, department_id: u64) -> StaffoResult<Vec<u8>> {
        self.fetch_raw(&paths::department(department_id)).await
    }

    /// All schedules of a location, regardless of period
    pub async fn schedules(&self, location_id: u64) -> StaffoResult<Vec<u8>> {
        self.fetch_raw(&paths::location_schedules(location_id)).await
    }

    /// Schedules of a location overlapping `range`
    pub async fn schedules_in_range(
        &self,
        location_id: u64,
        range: &DateRange,
    ) -> StaffoResult<Vec<Schedule>> {
        let url = query::with_query(
            &self.url(&paths::location_schedules(location_id)),
            range.query_pairs(),
        )?;
        info!("Fetching schedules: {}", url);

        let body = self.fetcher.get(url.as_str()).await?;
        projector::decode_list(&body, self.decode_mode)
    }

    /// IDs of the schedules of a location overlapping `range`, in response order
    pub async fn schedule_ids(&self, location_id: u64, range: &DateRange) -> StaffoResult<Vec<String>> {
        let schedules = self.schedules_in_range(location_id, range).await?;
        Ok(projector::project_ids(&schedules))
    }

    /// Shifts of a schedule; only the first page the API returns is fetched
    pub async fn schedule_shifts(&self, schedule_id: u64) -> StaffoResult<Vec<u8>> {
        self.fetch_raw(&paths::schedule_shifts(schedule_id)).await
    }

    /// Shifts of one or more departments
    pub async fn department_shifts(&self, department_ids: &[u64]) -> StaffoResult<Vec<u8>> {
        let url = query::with_query(
            &self.url(paths::SHIFTS),
            query::department_query(department_ids),
        )?;
        info!("Fetching shifts: {}", url);

        self.fetcher.get(url.as_str()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Fetcher answering from a fixed table and recording requested URLs
    #[derive(Default)]
    struct StubFetcher {
        responses: HashMap<String, &'static str>,
        requested: Mutex<Vec<String>>,
    }

    impl StubFetcher {
        fn respond(mut self, url: &str, body: &'static str) -> Self {
            self.responses.insert(url.to_string(), body);
            self
        }
    }

    #[async_trait]
    impl Fetch for StubFetcher {
        async fn get(&self, url: &str) -> StaffoResult<Vec<u8>> {
            self.requested.lock().unwrap().push(url.to_string());
            self.responses
                .get(url)
                .map(|body| body.as_bytes().to_vec())
                .ok_or_else(|| Error::Transport(format!("connection refused: {}", url)))
        }
    }

    fn config(strict: bool) -> Arc<Config> {
        Arc::new(Config {
            hostname: "https://api.example.com".to_string(),
            subdomain: "/v3/acme".to_string(),
            username: "u".to_string(),
            password: "p".to_string(),
            strict_decode: strict,
        })
    }

    fn range() -> DateRange {
        DateRange::new(
            chrono::NaiveDate::from_ymd_opt(2020, 7, 27).unwrap(),
            chrono::NaiveDate::from_ymd_opt(2020, 8, 2).unwrap(),
        )
        .unwrap()
    }

    const RANGE_URL: &str = "https://api.example.com/v3/acme/locations/37759/schedules.json\
        ?from=2020-07-27T00%3A00%3A00%2B01%3A00&until=2020-08-02T23%3A59%3A59%2B01%3A00";

    #[tokio::test]
    async fn test_schedule_ids() {
        let stub = Arc::new(StubFetcher::default().respond(
            RANGE_URL,
            r#"[{"id":662108,"location_id":37759,"bop":"2020-07-27T00:00:00+02:00","eop":"2020-08-02T23:59:59+02:00"},{"id":662109}]"#,
        ));
        let client = StaffoClient::with_fetcher(config(false), stub.clone());

        let ids = client.schedule_ids(37759, &range()).await.unwrap();
        assert_eq!(ids, vec!["662108", "662109"]);
        assert_eq!(*stub.requested.lock().unwrap(), vec![RANGE_URL.to_string()]);
    }

    #[tokio::test]
    async fn test_schedule_ids_error_body() {
        let stub = Arc::new(StubFetcher::default().respond(RANGE_URL, r#"{"error":"x"}"#));

        let lenient = StaffoClient::with_fetcher(config(false), stub.clone());
        assert!(lenient.schedule_ids(37759, &range()).await.unwrap().is_empty());

        let strict = StaffoClient::with_fetcher(config(true), stub);
        assert_eq!(strict.decode_mode(), DecodeMode::Strict);
        let err = strict.schedule_ids(37759, &range()).await.unwrap_err();
        assert!(matches!(err, Error::UnexpectedShape(_)));
    }

    #[tokio::test]
    async fn test_transport_error_propagates() {
        let client = StaffoClient::with_fetcher(config(false), Arc::new(StubFetcher::default()));
        let err = client.schedule_ids(1, &range()).await.unwrap_err();
        assert!(matches!(err, Error::Transport(_)));
    }

    #[tokio::test]
    async fn test_raw_resources() {
        let stub = Arc::new(
            StubFetcher::default()
                .respond("https://api.example.com/v3/acme/locations/5.json", r#"{"id":5}"#)
                .respond("https://api.example.com/v3/acme/departments.json", "[]")
                .respond("https://api.example.com/v3/acme/departments/9.json", r#"{"id":9}"#)
                .respond("https://api.example.com/v3/acme/locations/5/schedules.json", "[1]")
                .respond("https://api.example.com/v3/acme/schedules/3/shifts.json", "[2]"),
        );
        let client = StaffoClient::with_fetcher(config(false), stub);

        assert_eq!(client.location(5).await.unwrap(), br#"{"id":5}"#);
        assert_eq!(client.departments().await.unwrap(), b"[]");
        assert_eq!(client.department(9).await.unwrap(), br#"{"id":9}"#);
        assert_eq!(client.schedules(5).await.unwrap(), b"[1]");
        assert_eq!(client.schedule_shifts(3).await.unwrap(), b"[2]");
    }

    #[tokio::test]
    async fn test_department_shifts_query() {
        let url = "https://api.example.com/v3/acme/shifts.json?department_ids%5B%5D=4&department_ids%5B%5D=8";
        let stub = Arc::new(StubFetcher::default().respond(url, "[]"));
        let client = StaffoClient::with_fetcher(config(false), stub.clone());

        assert_eq!(client.department_shifts(&[4, 8]).await.unwrap(), b"[]");
        assert_eq!(*stub.requested.lock().unwrap(), vec![url.to_string()]);
    }

    #[tokio::test]
    async fn test_account() {
        let stub = Arc::new(StubFetcher::default().respond(
            "https://api.example.com/v3/acme/account.json",
            r#"{"id":1,"time_zone":"Europe/London"}"#,
        ));
        let client = StaffoClient::with_fetcher(config(false), stub);
        let account = client.account().await.unwrap().unwrap();
        assert_eq!(account.time_zone.as_deref(), Some("Europe/London"));
    }
}
