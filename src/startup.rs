use crate::commands::CommandContext;
use crate::components::staffomatic::DecodeMode;
use crate::components::StaffoClient;
use crate::config::Config;
use crate::error::Error;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, error};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Initialize logging with environment-based configuration.
///
/// Logs go to stderr so stdout only carries command output.
pub fn init_logging() -> miette::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,reqwest=warn,hyper=warn")),
        )
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| Error::Other(format!("Failed to set up logging: {}", e)))?;

    Ok(())
}

/// Load the application config; `strict` forces strict decoding
pub fn load_config(path: Option<&Path>, strict: bool) -> miette::Result<Arc<Config>> {
    match Config::load(path) {
        Ok(mut config) => {
            config.strict_decode |= strict;
            debug!("Loaded configuration: {:?}", config);
            Ok(Arc::new(config))
        }
        Err(e) => {
            error!("Failed to load configuration: {:?}", e);
            Err(e.into())
        }
    }
}

/// Build the API client and the command context around it
pub fn build_context(config: Arc<Config>) -> miette::Result<CommandContext> {
    let client = StaffoClient::new(config)?;
    debug!(
        "Decoding responses in {} mode",
        match client.decode_mode() {
            DecodeMode::Strict => "strict",
            DecodeMode::Lenient => "lenient",
        }
    );
    Ok(CommandContext::new(client))
}
