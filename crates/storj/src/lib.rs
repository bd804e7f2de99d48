// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Storj side of the Storj-Fluree connector
//!
//! Uploads byte payloads as single objects to a Storj bucket through
//! the S3-compatible gateway. The pieces are:
//!
//! - **StorjConfig**: credentials and addressing read from
//!   `storj_config.json`, including the object-name composition used
//!   for snapshot uploads.
//! - **StorjSession**: a scoped gateway session for one bucket, torn
//!   down on drop on every exit path.
//! - **Uploader**: the write path, with an explicit bounded retry
//!   policy (two attempts, no backoff) and an optional diagnostic
//!   verification read after commit.
//!
//! The [`ObjectStorage`] trait is the seam between the uploader and the
//! gateway; tests substitute in-memory and fault-injecting backends
//! through it.

mod config;
mod error;
mod session;
mod uploader;

pub use config::StorjConfig;
pub use error::StorjError;
pub use session::{ObjectStorage, StorjSession};
pub use uploader::{RetryPolicy, Uploader};

/// Result type for Storj operations
pub type Result<T> = std::result::Result<T, StorjError>;
