// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Remote snapshot trigger against the Fluree HTTP API

use crate::{FlureeConfig, FlureeError, Result};

/// Ask the Fluree ledger to create a new snapshot of the configured
/// database.
///
/// Sends an empty POST to `{ip}fdb/{network}/{dbid}/snapshot` and
/// returns the response body verbatim; it is a human-readable
/// confirmation, not a structured payload. Connection failures and
/// non-2xx responses are errors, and there is no retry at this layer.
pub async fn create_snapshot(config: &FlureeConfig) -> Result<String> {
    let url = config.snapshot_url();
    log::debug!("sending snapshot request to {url}");

    let response = reqwest::Client::new()
        .post(&url)
        .header(reqwest::header::CONTENT_TYPE, "application/json")
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(FlureeError::UnexpectedStatus { url, status });
    }

    Ok(response.text().await?)
}
