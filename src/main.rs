// ==========================================
// Inventory Console - entry point
// ==========================================
// Single-operator console: open the store once, run the prompt loop
// to completion, release everything on exit.
// ==========================================

use anyhow::Context;
use inventory_console::app::{AppState, Shell};
use inventory_console::config::AppConfig;
use inventory_console::logging;

fn main() -> anyhow::Result<()> {
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{} v{}", inventory_console::APP_NAME, inventory_console::VERSION);
    tracing::info!("==================================================");

    let config = AppConfig::from_env();
    tracing::info!(db_path = %config.db_path, "opening product store");

    let app = AppState::new(config).context("failed to open the product store")?;

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut shell = Shell::new(&app, stdin.lock(), stdout.lock());
    shell.run()?;

    tracing::info!("session ended");
    Ok(())
}
