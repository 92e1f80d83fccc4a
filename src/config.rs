use crate::error::{config_error, env_error, Error, StaffoResult};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Config file looked up in the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

/// Environment variable naming an alternative config file
pub const CONFIG_PATH_VAR: &str = "STAFFO_CONFIG";

// Environment overrides for the individual keys
const HOSTNAME_VAR: &str = "STAFFO_HOSTNAME";
const SUBDOMAIN_VAR: &str = "STAFFO_SUBDOMAIN";
const USERNAME_VAR: &str = "STAFFO_USERNAME";
const PASSWORD_VAR: &str = "STAFFO_PASSWORD";
const STRICT_DECODE_VAR: &str = "STAFFO_STRICT_DECODE";

/// Client configuration: API location, credentials and decode behaviour
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Scheme and host of the API, e.g. `https://api.staffomatic.com`
    pub hostname: String,
    /// Tenant path segment appended verbatim to the hostname, e.g. `/v3/acme`
    pub subdomain: String,
    /// Basic auth user
    pub username: String,
    /// Basic auth password
    pub password: String,
    /// Return decode errors instead of empty results
    #[serde(default)]
    pub strict_decode: bool,
}

/// Raw file contents before environment overrides are applied
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    hostname: Option<String>,
    subdomain: Option<String>,
    username: Option<String>,
    password: Option<String>,
    strict_decode: Option<bool>,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("hostname", &self.hostname)
            .field("subdomain", &self.subdomain)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("strict_decode", &self.strict_decode)
            .finish()
    }
}

impl Config {
    /// Load configuration from the config file and environment.
    ///
    /// `path` wins over `STAFFO_CONFIG`, which wins over `./config.toml`.
    /// The default file may be absent when the environment supplies every key;
    /// an explicitly named file must exist.
    pub fn load(path: Option<&Path>) -> StaffoResult<Self> {
        // Load .env file if it exists
        dotenv().ok();

        let explicit = path
            .map(Path::to_path_buf)
            .or_else(|| env::var(CONFIG_PATH_VAR).ok().map(PathBuf::from));
        let is_explicit = explicit.is_some();
        let path = explicit.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

        let file = match fs::read_to_string(&path) {
            Ok(content) => {
                debug!("Read configuration from {}", path.display());
                toml::from_str::<FileConfig>(&content)?
            }
            Err(e) if e.kind() == ErrorKind::NotFound && !is_explicit => {
                debug!("No {} found, using environment only", path.display());
                FileConfig::default()
            }
            Err(e) => {
                return Err(config_error(&format!(
                    "Failed to read {}: {}",
                    path.display(),
                    e
                )))
            }
        };

        Self::resolve(file, |key| env::var(key).ok())
    }

    /// Parse configuration from TOML text without consulting the environment
    pub fn from_toml_str(content: &str) -> StaffoResult<Self> {
        Self::resolve(toml::from_str(content)?, |_| None)
    }

    /// Merge file values with overrides from `lookup` and require every key
    fn resolve(file: FileConfig, lookup: impl Fn(&str) -> Option<String>) -> StaffoResult<Self> {
        let required = |var: &str, key: &str, value: Option<String>| -> StaffoResult<String> {
            lookup(var)
                .or(value)
                .ok_or_else(|| config_error(&format!("Missing `{}` (or {})", key, var)))
        };

        let strict_decode = match lookup(STRICT_DECODE_VAR) {
            Some(raw) => raw
                .trim()
                .parse::<bool>()
                .map_err(|_| env_error(STRICT_DECODE_VAR))?,
            None => file.strict_decode.unwrap_or(false),
        };

        let config = Config {
            hostname: required(HOSTNAME_VAR, "hostname", file.hostname)?,
            subdomain: required(SUBDOMAIN_VAR, "subdomain", file.subdomain)?,
            username: required(USERNAME_VAR, "username", file.username)?,
            password: required(PASSWORD_VAR, "password", file.password)?,
            strict_decode,
        };

        if config.hostname.is_empty() {
            return Err(Error::Config("`hostname` must not be empty".to_string()));
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const FULL: &str = r#"
        hostname = "https://api.staffomatic.com"
        subdomain = "/v3/acme"
        username = "me@example.com"
        password = "secret"
    "#;

    #[test]
    fn test_from_toml_str() {
        let config = Config::from_toml_str(FULL).unwrap();
        assert_eq!(config.hostname, "https://api.staffomatic.com");
        assert_eq!(config.subdomain, "/v3/acme");
        assert_eq!(config.username, "me@example.com");
        assert_eq!(config.password, "secret");
        assert!(!config.strict_decode);
    }

    #[test]
    fn test_missing_key_is_reported() {
        let err = Config::from_toml_str("hostname = \"h\"\nsubdomain = \"/s\"\nusername = \"u\"")
            .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains("password"));
    }

    #[test]
    fn test_empty_hostname_rejected() {
        let err = Config::from_toml_str(
            "hostname = \"\"\nsubdomain = \"/s\"\nusername = \"u\"\npassword = \"p\"",
        )
        .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_malformed_toml() {
        let err = Config::from_toml_str("hostname = ").unwrap_err();
        assert!(matches!(err, Error::Serialization(_)));
    }

    #[test]
    fn test_environment_overrides_file() {
        let env: HashMap<&str, &str> = [
            ("STAFFO_PASSWORD", "from-env"),
            ("STAFFO_STRICT_DECODE", "true"),
        ]
        .into_iter()
        .collect();
        let file: FileConfig = toml::from_str(FULL).unwrap();

        let config = Config::resolve(file, |k| env.get(k).map(|v| v.to_string())).unwrap();
        assert_eq!(config.password, "from-env");
        assert_eq!(config.username, "me@example.com");
        assert!(config.strict_decode);
    }

    #[test]
    fn test_environment_only() {
        let env: HashMap<&str, &str> = [
            ("STAFFO_HOSTNAME", "http://localhost:3000"),
            ("STAFFO_SUBDOMAIN", "/t"),
            ("STAFFO_USERNAME", "u"),
            ("STAFFO_PASSWORD", "p"),
        ]
        .into_iter()
        .collect();

        let config =
            Config::resolve(FileConfig::default(), |k| env.get(k).map(|v| v.to_string())).unwrap();
        assert_eq!(config.hostname, "http://localhost:3000");
        assert_eq!(config.subdomain, "/t");
    }

    #[test]
    fn test_bad_strict_flag() {
        let file: FileConfig = toml::from_str(FULL).unwrap();
        let err = Config::resolve(file, |k| {
            (k == "STAFFO_STRICT_DECODE").then(|| "maybe".to_string())
        })
        .unwrap_err();
        assert!(matches!(err, Error::Environment(_)));
    }

    #[test]
    fn test_debug_redacts_password() {
        let config = Config::from_toml_str(FULL).unwrap();
        let printed = format!("{:?}", config);
        assert!(!printed.contains("secret"));
        assert!(printed.contains("<redacted>"));
    }
}
