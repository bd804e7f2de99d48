// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for Storj upload operations

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorjError {
    #[error("failed to read config file {path}: {source}")]
    ConfigLoad {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not open gateway session: {0}")]
    Session(String),

    #[error("object store error: {0}")]
    ObjectStore(#[from] object_store::Error),

    #[error("upload of {name} failed after {attempts} attempts: {source}")]
    Upload {
        name: String,
        attempts: u32,
        #[source]
        source: Box<StorjError>,
    },

    #[error("verification mismatch for {name}: downloaded bytes differ from uploaded payload")]
    VerificationMismatch { name: String },
}
