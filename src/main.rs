//! Address Book - Main entry point
//!
//! Runs the interactive assistant on stdin/stdout. Logs go to stderr so that
//! stdout carries only command responses.

use address_book::{run_session, Assistant, Config};
use anyhow::Result;
use tokio::io::BufReader;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::from_env();

    let default_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!("Birthday window: {} days", config.birthday_window_days);

    let mut assistant = Assistant::new(config.birthday_window_days);
    let stdin = BufReader::new(tokio::io::stdin());
    run_session(&mut assistant, &config.prompt, stdin, tokio::io::stdout()).await?;

    info!("Session finished with {} contacts", assistant.book().len());
    Ok(())
}
