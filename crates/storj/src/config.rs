// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Storj storage configuration and object naming

use std::fmt;
use std::path::Path;

use serde::Deserialize;

use crate::{Result, StorjError};

/// Keys read from the `storj_config.json` file.
///
/// Identifies one destination bucket plus the key material needed to
/// address and encrypt objects there. Loaded once per command
/// invocation and immutable afterwards.
#[derive(Clone, Default, Deserialize)]
#[serde(default)]
pub struct StorjConfig {
    /// Access credential for the gateway
    pub apikey: String,

    /// Gateway address (e.g. `https://gateway.storjshare.io`)
    pub satellite: String,

    /// Destination bucket
    pub bucket: String,

    /// Prefix prepended to every uploaded object name
    #[serde(rename = "uploadPath")]
    pub upload_path: String,

    /// Passphrase the content-encryption key is derived from
    #[serde(rename = "encryptionpassphrase")]
    pub encryption_passphrase: String,
}

impl StorjConfig {
    /// Load the configuration from a JSON file.
    ///
    /// Decoding is tolerant: missing fields default to empty strings,
    /// and a document that does not decode at all yields the default
    /// record. Only the file read itself can fail.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| StorjError::ConfigLoad {
            path: path.to_path_buf(),
            source,
        })?;

        let config: StorjConfig = serde_json::from_str(&text).unwrap_or_else(|e| {
            log::warn!(
                "could not decode {}: {}; falling back to defaults",
                path.display(),
                e
            );
            StorjConfig::default()
        });

        log::debug!(
            "read Storj configuration from {}: satellite={} bucket={} uploadPath={}",
            path.display(),
            config.satellite,
            config.bucket,
            config.upload_path
        );

        Ok(config)
    }

    /// Compose the logical object name for an upload.
    ///
    /// Existing stored objects were written as
    /// `{uploadPath}{database}_{snapshot}` with
    /// `database = {network}/{dbid}`, so the separator placement here
    /// is fixed. Names are not unique across repeated uploads of the
    /// same snapshot; collisions overwrite, last write wins.
    pub fn object_name(&self, database: &str, snapshot: &str) -> String {
        format!("{}{}_{}", self.upload_path, database, snapshot)
    }
}

// The API key and passphrase never appear in logs or debug output.
impl fmt::Debug for StorjConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StorjConfig")
            .field("apikey", &"<redacted>")
            .field("satellite", &self.satellite)
            .field("bucket", &self.bucket)
            .field("upload_path", &self.upload_path)
            .field("encryption_passphrase", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_all_fields() {
        let file = write_config(
            r#"{
                "apikey": "key",
                "satellite": "https://gateway.example",
                "bucket": "backups",
                "uploadPath": "fluree/",
                "encryptionpassphrase": "secret"
            }"#,
        );

        let config = StorjConfig::load(file.path()).unwrap();
        assert_eq!(config.apikey, "key");
        assert_eq!(config.satellite, "https://gateway.example");
        assert_eq!(config.bucket, "backups");
        assert_eq!(config.upload_path, "fluree/");
        assert_eq!(config.encryption_passphrase, "secret");
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let file = write_config(r#"{"bucket": "backups"}"#);

        let config = StorjConfig::load(file.path()).unwrap();
        assert_eq!(config.bucket, "backups");
        assert_eq!(config.apikey, "");
        assert_eq!(config.upload_path, "");
    }

    #[test]
    fn object_name_composition_is_exact() {
        let config = StorjConfig {
            upload_path: "up/".to_string(),
            ..Default::default()
        };
        assert_eq!(config.object_name("n/d", "5.avro"), "up/n/d_5.avro");
    }

    #[test]
    fn object_name_with_empty_prefix() {
        let config = StorjConfig::default();
        assert_eq!(config.object_name("n/d", "5.avro"), "n/d_5.avro");
    }

    #[test]
    fn debug_output_redacts_secrets() {
        let config = StorjConfig {
            apikey: "super-secret-key".to_string(),
            encryption_passphrase: "super-secret-phrase".to_string(),
            bucket: "backups".to_string(),
            ..Default::default()
        };

        let rendered = format!("{config:?}");
        assert!(!rendered.contains("super-secret-key"));
        assert!(!rendered.contains("super-secret-phrase"));
        assert!(rendered.contains("backups"));
    }
}
