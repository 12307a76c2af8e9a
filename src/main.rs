//! Contact Assistant - Main entry point
//!
//! Runs one interactive session on stdin/stdout. Logs go to stderr so they
//! never interleave with the conversation.

use anyhow::Result;
use contact_assistant::{run_session, Assistant, Config, SystemClock};
use tokio::io::BufReader;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // RUST_LOG wins over LOG_LEVEL
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(
        "Configuration loaded: birthday window {} days",
        config.birthday_window_days
    );

    let mut assistant =
        Assistant::new(SystemClock).with_birthday_window(config.birthday_window_days);
    let input = BufReader::new(tokio::io::stdin());
    let mut output = tokio::io::stdout();

    if let Err(e) = run_session(&mut assistant, &config.prompt, input, &mut output).await {
        error!("Session aborted: {}", e);
        return Err(e.into());
    }

    info!("Contact Assistant shutdown complete");
    Ok(())
}
