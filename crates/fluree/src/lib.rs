// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Fluree side of the Storj-Fluree connector
//!
//! This crate covers everything the connector needs from a Fluree
//! ledger: loading the database connection configuration, asking the
//! ledger to create a new snapshot, and working with the snapshot files
//! the ledger writes to local disk.
//!
//! Snapshot files live under
//! `{storageDirectory}/{network}/{dbid}/snapshot/` and are named
//! `<integer>.avro` by convention, with the integer increasing over
//! time. The catalog functions in this crate list that directory and
//! pick the latest entry by numeric ordering; see
//! [`latest_snapshot`] for the exact (and deliberately preserved)
//! selection rules.

mod catalog;
mod client;
mod config;
mod error;

pub use catalog::{latest_snapshot, list_snapshots, read_snapshot, resolve_snapshot};
pub use client::create_snapshot;
pub use config::FlureeConfig;
pub use error::FlureeError;

/// Result type for Fluree operations
pub type Result<T> = std::result::Result<T, FlureeError>;
