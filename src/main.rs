use clap::Parser;
use staffo::commands::{self, Cli};
use staffo::startup;
use tracing::info;

#[tokio::main]
async fn main() -> miette::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    startup::init_logging()?;

    info!("Starting staffo");

    // Load configuration
    let config = startup::load_config(cli.config.as_deref(), cli.strict)?;
    let ctx = startup::build_context(config)?;

    // Run the command
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    commands::execute(&ctx, cli.command, &mut out).await?;

    Ok(())
}
