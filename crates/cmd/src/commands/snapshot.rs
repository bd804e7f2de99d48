use std::path::Path;

use anyhow::{Context, Result};
use fluree::FlureeConfig;

/// Ask the configured Fluree ledger for a new snapshot and print its
/// confirmation.
pub async fn snapshot_command(db_config: &Path) -> Result<()> {
    let config = FlureeConfig::load(db_config)?;

    let confirmation = fluree::create_snapshot(&config)
        .await
        .with_context(|| format!("snapshot request for {}/{}", config.network, config.dbid))?;

    println!(
        "Created a snapshot for {}/{} - {}\n...Complete!",
        config.network, config.dbid, confirmation
    );
    Ok(())
}
