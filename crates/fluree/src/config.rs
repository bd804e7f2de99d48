// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Fluree database connection configuration

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{FlureeError, Result};

/// Keys read from the `db_property.json` file.
///
/// Identifies one Fluree database and where its snapshot files live on
/// disk. Loaded once per command invocation and immutable afterwards.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FlureeConfig {
    /// Base address of the Fluree HTTP API, including trailing slash
    /// (e.g. `http://localhost:8090/`)
    pub ip: String,

    /// Logical network name
    pub network: String,

    /// Database identifier within the network
    pub dbid: String,

    /// Root of the ledger's local file storage
    #[serde(rename = "storageDirectory")]
    pub storage_directory: String,
}

impl FlureeConfig {
    /// Load the configuration from a JSON file.
    ///
    /// Decoding is tolerant: missing fields default to empty strings,
    /// and a document that does not decode at all yields the default
    /// record. Only the file read itself can fail.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| FlureeError::ConfigLoad {
            path: path.to_path_buf(),
            source,
        })?;

        let config: FlureeConfig = serde_json::from_str(&text).unwrap_or_else(|e| {
            log::warn!(
                "could not decode {}: {}; falling back to defaults",
                path.display(),
                e
            );
            FlureeConfig::default()
        });

        log::debug!(
            "read Fluree configuration from {}: network={} dbid={} storageDirectory={}",
            path.display(),
            config.network,
            config.dbid,
            config.storage_directory
        );

        Ok(config)
    }

    /// Directory holding this database's snapshot files.
    pub fn snapshot_dir(&self) -> PathBuf {
        Path::new(&self.storage_directory)
            .join(&self.network)
            .join(&self.dbid)
            .join("snapshot")
    }

    /// Endpoint for the snapshot-creation request.
    pub fn snapshot_url(&self) -> String {
        format!("{}fdb/{}/{}/snapshot", self.ip, self.network, self.dbid)
    }
}
