use anyhow::{Context, Result};
use sodabot::config::HookConfig;
use sodabot::Handler;
use std::io::Read;
use tracing_subscriber::fmt::time::ChronoLocal;

#[tokio::main]
async fn main() -> Result<()> {
    // --- 1. Load Configuration ---
    let config = HookConfig::from_env().context("Failed to load hook configuration")?;

    // --- 2. Initialize Logging ---
    // Logs go to stderr; stdout carries only the directive.
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .with_timer(ChronoLocal::rfc_3339())
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Configuration loaded successfully. Reading one event from stdin...");

    // --- 3. Read One Event ---
    let mut raw = String::new();
    std::io::stdin()
        .read_to_string(&mut raw)
        .context("Failed to read event from stdin")?;
    let event: serde_json::Value =
        serde_json::from_str(&raw).context("Event is not valid JSON")?;

    // --- 4. Route the Event ---
    let handler = Handler::new(config);
    let response = handler.handle(event).await.context("Turn failed")?;

    // --- 5. Emit the Directive ---
    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}
