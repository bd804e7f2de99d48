// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for Fluree operations

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FlureeError {
    #[error("failed to read config file {path}: {source}")]
    ConfigLoad {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("snapshot directory {path} not found: {source}")]
    DirectoryNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("snapshot {0} not in the snapshot list for this database")]
    SnapshotNotFound(String),

    #[error("snapshot request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("snapshot request to {url} returned status {status}")]
    UnexpectedStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
