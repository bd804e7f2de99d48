// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use cmd::commands::{list_command, snapshot_command, store_command, test_command};

#[derive(Parser)]
#[command(name = "storj-fluree")]
#[command(version, about = "A Storj-Fluree connector. Upload and retrieve Fluree snapshot files on Storj.", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose debug output, including a post-upload verification read
    #[arg(short, long, global = true)]
    debug: bool,

    /// Path to the Fluree database configuration file
    #[arg(long, global = true, default_value = "./config/db_property.json")]
    db_config: PathBuf,

    /// Path to the Storj storage configuration file
    #[arg(long, global = true, default_value = "./config/storj_config.json")]
    storj_config: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a snapshot for the Fluree database specified in the configuration
    #[command(visible_alias = "sn")]
    Snapshot,

    /// List all available snapshots
    #[command(visible_alias = "ls")]
    List,

    /// Upload sample data to verify the Storj configuration
    #[command(visible_alias = "t")]
    Test,

    /// Upload a Fluree snapshot to the configured Storj bucket
    #[command(visible_alias = "st")]
    Store {
        /// Snapshot file name to upload; defaults to the latest snapshot
        snapshot: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // The debug flag is threaded explicitly: it raises the log filter
    // here and enables the uploader's verification read per command.
    env_logger::Builder::from_default_env()
        .filter_level(if cli.debug {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .init();

    match &cli.command {
        Commands::Snapshot => snapshot_command(&cli.db_config).await,
        Commands::List => list_command(&cli.db_config).await,
        Commands::Test => test_command(&cli.storj_config, cli.debug).await,
        Commands::Store { snapshot } => {
            store_command(&cli.db_config, &cli.storj_config, snapshot.as_deref(), cli.debug).await
        }
    }
}
