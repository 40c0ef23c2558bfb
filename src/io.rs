//! Snapshot files: the offline counterpart of the fetcher.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{bail, Context, Result};
use tempfile::NamedTempFile;

use crate::hierarchy::HierarchySnapshot;

/// Write a snapshot to `path` as JSON (tempfile, then atomic rename). No
/// accidental overwrite unless `force`.
pub fn write_snapshot(path: &Path, snapshot: &HierarchySnapshot, force: bool) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create dir {}", parent.display()))?;
        }
    }
    if !force && path.exists() {
        bail!("Refusing to overwrite existing file: {} (use --force)", path.display());
    }

    let tmp = NamedTempFile::new_in(path.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or(Path::new(".")))
        .context("create temp file")?;
    serde_json::to_writer_pretty(tmp.as_file(), snapshot)
        .with_context(|| format!("write {}", path.display()))?;
    tmp.as_file().sync_all().ok(); // best-effort fsync
    tmp.persist(path)
        .with_context(|| format!("rename to {}", path.display()))?;
    if let Some(dir) = path.parent() {
        let _ = File::open(dir).and_then(|f| f.sync_all());
    }
    Ok(())
}

/// Read a snapshot file. Construction re-runs the id/attachment checks, so a
/// hand-edited file with duplicate ids is rejected here.
pub fn read_snapshot(path: &Path) -> Result<HierarchySnapshot> {
    let file = File::open(path).with_context(|| format!("open {}", path.display()))?;
    let snapshot = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parse snapshot {}", path.display()))?;
    Ok(snapshot)
}
