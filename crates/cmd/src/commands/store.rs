use std::path::Path;

use anyhow::{Context, Result};
use bytes::Bytes;
use fluree::FlureeConfig;
use storj::{StorjConfig, StorjSession, Uploader};

/// Upload a Fluree snapshot to the configured Storj bucket.
///
/// With no explicit name the latest snapshot (by numeric filename
/// ordering) is uploaded. An explicit name must be present in the
/// snapshot directory listing; membership is checked before anything
/// touches the disk, and an unknown name never falls back to the
/// latest snapshot.
pub async fn store_command(
    db_config: &Path,
    storj_config: &Path,
    requested: Option<&str>,
    verify: bool,
) -> Result<()> {
    let fluree_config = FlureeConfig::load(db_config)?;

    let snapshots = fluree::list_snapshots(&fluree_config)?;
    let snapshot = fluree::resolve_snapshot(&snapshots, requested)?;
    log::debug!(
        "uploading snapshot {snapshot} for {}/{}",
        fluree_config.network,
        fluree_config.dbid
    );

    let data = fluree::read_snapshot(&fluree_config, &snapshot)
        .with_context(|| format!("reading snapshot {snapshot}"))?;

    let storj_config = StorjConfig::load(storj_config)?;
    let database = format!("{}/{}", fluree_config.network, fluree_config.dbid);
    let object_name = storj_config.object_name(&database, &snapshot);

    let session = StorjSession::connect(&storj_config)?;
    let uploader = Uploader::new(session).with_verification(verify);
    uploader
        .upload(&object_name, Bytes::from(data))
        .await
        .with_context(|| format!("upload of snapshot {snapshot}"))?;

    println!(
        "Stored snapshot {} as {} in bucket {}",
        snapshot, object_name, storj_config.bucket
    );
    Ok(())
}
