// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Gateway session construction
//!
//! The connector reaches Storj through the S3-compatible gateway, so a
//! session is an `object_store` handle scoped to one bucket. The
//! session owns the credential-derived state for exactly as long as an
//! upload needs it; dropping the session tears everything down, on
//! error paths included.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use object_store::aws::AmazonS3Builder;
use object_store::{ClientConfigKey, ClientOptions, ObjectStore, path::Path as ObjectPath};
use sha2::{Digest, Sha256};

use crate::{Result, StorjConfig, StorjError};

/// Dial timeout for session establishment, fixed at build time.
const DIAL_TIMEOUT: Duration = Duration::from_secs(1);

/// User agent the gateway sees, carried over from the original
/// connector registration.
const USER_AGENT: &str = "fluree";

/// Narrow interface the uploader needs from a storage backend.
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Write `payload` durably under `name`.
    async fn put(&self, name: &str, payload: Bytes) -> Result<()>;

    /// Read the full object stored under `name`.
    async fn get(&self, name: &str) -> Result<Bytes>;
}

/// A scoped session against one bucket of the Storj gateway.
pub struct StorjSession {
    store: Arc<dyn ObjectStore>,
    bucket: String,
}

impl StorjSession {
    /// Open a session for the configured bucket.
    ///
    /// The access credential authenticates the session; the gateway
    /// expects the salted content key derived from the encryption
    /// passphrase, never the raw passphrase itself.
    pub fn connect(config: &StorjConfig) -> Result<Self> {
        log::debug!(
            "opening gateway session to {} (bucket {})",
            config.satellite,
            config.bucket
        );

        let client_options = ClientOptions::new()
            .with_connect_timeout(DIAL_TIMEOUT)
            .with_config(ClientConfigKey::UserAgent, USER_AGENT)
            .with_allow_http(true);

        let store = AmazonS3Builder::new()
            .with_bucket_name(&config.bucket)
            .with_endpoint(&config.satellite)
            // The gateway ignores the region, but the client requires one.
            .with_region("global")
            .with_access_key_id(&config.apikey)
            .with_secret_access_key(content_key(&config.encryption_passphrase))
            .with_client_options(client_options)
            .build()
            .map_err(|e| StorjError::Session(e.to_string()))?;

        Ok(Self {
            store: Arc::new(store),
            bucket: config.bucket.clone(),
        })
    }

    /// Bucket this session is scoped to.
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    #[cfg(test)]
    pub(crate) fn with_store(store: Arc<dyn ObjectStore>, bucket: &str) -> Self {
        Self {
            store,
            bucket: bucket.to_string(),
        }
    }
}

/// Derive the gateway content key from the encryption passphrase.
fn content_key(passphrase: &str) -> String {
    hex::encode(Sha256::digest(passphrase.as_bytes()))
}

#[async_trait]
impl ObjectStorage for StorjSession {
    async fn put(&self, name: &str, payload: Bytes) -> Result<()> {
        let path = ObjectPath::from(name);
        self.store.put(&path, payload.into()).await?;
        Ok(())
    }

    async fn get(&self, name: &str) -> Result<Bytes> {
        let path = ObjectPath::from(name);
        let result = self.store.get(&path).await?;
        Ok(result.bytes().await?)
    }
}
