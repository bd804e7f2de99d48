// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Object uploader with a bounded retry policy and optional
//! post-upload verification

use bytes::Bytes;

use crate::{ObjectStorage, Result, StorjError};

/// Retry policy for object writes: a fixed number of attempts, no
/// backoff. The bound is explicit so it stays testable and tunable;
/// the connector default is two attempts, matching the single retry
/// the original performed inline.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub max_attempts: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self { max_attempts: 2 }
    }
}

/// Uploads byte payloads as single objects through an [`ObjectStorage`]
/// backend.
pub struct Uploader<S> {
    store: S,
    retry: RetryPolicy,
    verify: bool,
}

impl<S: ObjectStorage> Uploader<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            retry: RetryPolicy::default(),
            verify: false,
        }
    }

    /// Enable the diagnostic post-upload verification read.
    pub fn with_verification(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Write `payload` durably under `name`.
    ///
    /// A failed write is retried up to the policy bound. There is no
    /// idempotency token, so a retry after a partial write may leave a
    /// duplicate or partial object at the backend's discretion, and a
    /// name collision overwrites the previous object. When verification
    /// is enabled the object is read back after the write and compared
    /// byte-for-byte; a mismatch is diagnostic, not a rollback.
    pub async fn upload(&self, name: &str, payload: Bytes) -> Result<()> {
        let mut attempts = 0;
        loop {
            attempts += 1;
            match self.store.put(name, payload.clone()).await {
                Ok(()) => break,
                Err(e) if attempts < self.retry.max_attempts => {
                    log::warn!("upload of {name} failed (attempt {attempts}): {e}; retrying");
                }
                Err(e) => {
                    return Err(StorjError::Upload {
                        name: name.to_string(),
                        attempts,
                        source: Box::new(e),
                    });
                }
            }
        }

        log::info!("uploaded {} bytes as {}", payload.len(), name);

        if self.verify {
            let downloaded = self.store.get(name).await?;
            if downloaded != payload {
                return Err(StorjError::VerificationMismatch {
                    name: name.to_string(),
                });
            }
            log::debug!("verification read for {name} matched the uploaded payload");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicU32, Ordering};

    use async_trait::async_trait;

    /// Backend that fails the first `fail_puts` writes, then behaves
    /// like a plain in-memory store.
    #[derive(Default)]
    struct FlakyStore {
        fail_puts: u32,
        puts: AtomicU32,
        objects: Mutex<HashMap<String, Bytes>>,
        corrupt_reads: bool,
    }

    impl FlakyStore {
        fn failing(fail_puts: u32) -> Self {
            Self {
                fail_puts,
                ..Default::default()
            }
        }

        fn transient_error() -> StorjError {
            StorjError::Session("connection reset".to_string())
        }
    }

    #[async_trait]
    impl ObjectStorage for FlakyStore {
        async fn put(&self, name: &str, payload: Bytes) -> Result<()> {
            let attempt = self.puts.fetch_add(1, Ordering::SeqCst) + 1;
            if attempt <= self.fail_puts {
                return Err(Self::transient_error());
            }
            self.objects
                .lock()
                .unwrap()
                .insert(name.to_string(), payload);
            Ok(())
        }

        async fn get(&self, name: &str) -> Result<Bytes> {
            if self.corrupt_reads {
                return Ok(Bytes::from_static(b"corrupted"));
            }
            self.objects
                .lock()
                .unwrap()
                .get(name)
                .cloned()
                .ok_or_else(Self::transient_error)
        }
    }

    #[tokio::test]
    async fn upload_succeeds_first_try() {
        let uploader = Uploader::new(FlakyStore::failing(0));
        uploader
            .upload("up/n/d_5.avro", Bytes::from_static(b"data"))
            .await
            .unwrap();
        assert_eq!(uploader.store.puts.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn retry_masks_a_single_failure() {
        let uploader = Uploader::new(FlakyStore::failing(1));
        uploader
            .upload("up/n/d_5.avro", Bytes::from_static(b"data"))
            .await
            .unwrap();
        assert_eq!(uploader.store.puts.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn two_failures_surface_an_upload_error() {
        let uploader = Uploader::new(FlakyStore::failing(2));
        let err = uploader
            .upload("up/n/d_5.avro", Bytes::from_static(b"data"))
            .await
            .unwrap_err();

        match err {
            StorjError::Upload { name, attempts, .. } => {
                assert_eq!(name, "up/n/d_5.avro");
                assert_eq!(attempts, 2);
            }
            other => panic!("expected Upload error, got {other:?}"),
        }
        assert_eq!(uploader.store.puts.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn retry_bound_is_tunable() {
        let uploader =
            Uploader::new(FlakyStore::failing(3)).with_retry(RetryPolicy { max_attempts: 4 });
        uploader
            .upload("up/n/d_5.avro", Bytes::from_static(b"data"))
            .await
            .unwrap();
        assert_eq!(uploader.store.puts.load(Ordering::SeqCst), 4);
    }

    #[tokio::test]
    async fn verification_passes_on_a_clean_round_trip() {
        let uploader = Uploader::new(FlakyStore::failing(0)).with_verification(true);
        uploader
            .upload("up/n/d_5.avro", Bytes::from_static(b"payload"))
            .await
            .unwrap();

        let stored = uploader.store.objects.lock().unwrap()["up/n/d_5.avro"].clone();
        assert_eq!(stored, Bytes::from_static(b"payload"));
    }

    #[tokio::test]
    async fn verification_flags_a_mismatch() {
        let store = FlakyStore {
            corrupt_reads: true,
            ..Default::default()
        };
        let uploader = Uploader::new(store).with_verification(true);

        let err = uploader
            .upload("up/n/d_5.avro", Bytes::from_static(b"payload"))
            .await
            .unwrap_err();
        assert!(matches!(err, StorjError::VerificationMismatch { .. }));
    }

    #[tokio::test]
    async fn verification_is_skipped_when_disabled() {
        // Corrupt reads must not matter when verification is off.
        let store = FlakyStore {
            corrupt_reads: true,
            ..Default::default()
        };
        let uploader = Uploader::new(store);
        uploader
            .upload("up/n/d_5.avro", Bytes::from_static(b"payload"))
            .await
            .unwrap();
    }
}
