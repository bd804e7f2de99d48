// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Snapshot catalog: directory listing, latest-snapshot selection, and
//! snapshot file reading

use crate::{FlureeConfig, FlureeError, Result};

/// Suffix snapshot files carry by convention.
const SNAPSHOT_SUFFIX: &str = ".avro";

/// List the entries of the database's snapshot directory.
///
/// Names are returned verbatim in directory order; sorting is the
/// caller's responsibility. No recursion, and no filtering either: a
/// subdirectory entry is returned like any other name.
pub fn list_snapshots(config: &FlureeConfig) -> Result<Vec<String>> {
    let dir = config.snapshot_dir();

    let entries = std::fs::read_dir(&dir).map_err(|source| FlureeError::DirectoryNotFound {
        path: dir.clone(),
        source,
    })?;

    let mut snapshots = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| FlureeError::DirectoryNotFound {
            path: dir.clone(),
            source,
        })?;
        snapshots.push(entry.file_name().to_string_lossy().into_owned());
    }

    Ok(snapshots)
}

/// Pick the latest snapshot by numeric filename ordering.
///
/// Each name is split on the first literal `.avro` and the head parsed
/// as a base-10 integer; names that do not parse count as 0, as does an
/// empty list. The returned name is synthesized as `"<max>.avro"` and
/// is not checked against the input, so a list with no numeric entries
/// yields `"0.avro"` even when no such file exists. This is inherited
/// behavior the rest of the pipeline depends on; callers must not
/// assume the returned name is present on disk.
pub fn latest_snapshot(snapshots: &[String]) -> String {
    let mut latest: u64 = 0;

    for snapshot in snapshots {
        let stem = match snapshot.split_once(SNAPSHOT_SUFFIX) {
            Some((head, _)) => head,
            None => snapshot.as_str(),
        };

        let number = stem.parse::<u64>().unwrap_or(0);
        if number > latest {
            latest = number;
        }
    }

    format!("{latest}{SNAPSHOT_SUFFIX}")
}

/// Resolve which snapshot to upload.
///
/// An explicitly requested name must be present in the listed catalog;
/// an unknown name is an error, never a fallback to the latest
/// snapshot. With no explicit request the latest snapshot is selected.
pub fn resolve_snapshot(snapshots: &[String], requested: Option<&str>) -> Result<String> {
    match requested {
        Some(name) => {
            if snapshots.iter().any(|s| s == name) {
                Ok(name.to_string())
            } else {
                Err(FlureeError::SnapshotNotFound(name.to_string()))
            }
        }
        None => Ok(latest_snapshot(snapshots)),
    }
}

/// Read the raw bytes of one snapshot file.
pub fn read_snapshot(config: &FlureeConfig, snapshot: &str) -> Result<Vec<u8>> {
    let path = config.snapshot_dir().join(snapshot);
    log::debug!("reading snapshot {}", path.display());
    Ok(std::fs::read(path)?)
}
