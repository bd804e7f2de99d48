use std::path::Path;

use anyhow::Result;
use fluree::FlureeConfig;

/// Print every entry of the database's snapshot directory.
pub async fn list_command(db_config: &Path) -> Result<()> {
    let snapshots = list_snapshot_names(db_config)?;

    println!("Available snapshots:");
    for snapshot in snapshots {
        println!("{snapshot}");
    }

    Ok(())
}

fn list_snapshot_names(db_config: &Path) -> Result<Vec<String>> {
    let config = FlureeConfig::load(db_config)?;
    Ok(fluree::list_snapshots(&config)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn lists_entries_from_the_configured_directory() {
        let tmp = tempdir().unwrap();
        let snapshot_dir = tmp.path().join("net1").join("db1").join("snapshot");
        fs::create_dir_all(&snapshot_dir).unwrap();
        fs::write(snapshot_dir.join("1.avro"), b"one").unwrap();
        fs::write(snapshot_dir.join("2.avro"), b"two").unwrap();

        let config_path = tmp.path().join("db_property.json");
        fs::write(
            &config_path,
            serde_json::json!({
                "network": "net1",
                "dbid": "db1",
                "storageDirectory": tmp.path().to_string_lossy(),
            })
            .to_string(),
        )
        .unwrap();

        let mut listed = list_snapshot_names(&config_path).unwrap();
        listed.sort();
        assert_eq!(listed, vec!["1.avro".to_string(), "2.avro".to_string()]);
    }
}
