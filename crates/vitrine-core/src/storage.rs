//! Atomic, content-diffed file writes
//!
//! The preview file may be read by the dev server while it is regenerated,
//! so the rename is the only mutation a reader can observe.

use std::path::{Path, PathBuf};

use scopeguard::ScopeGuard;
use tokio::fs::{self, File};
use tokio::io::AsyncWriteExt;
use tracing::debug;

use crate::error::StorageError;

/// Write `content` to `path` only if it differs from what is on disk.
///
/// Returns `Ok(true)` when the file was replaced and `Ok(false)` when the
/// existing bytes were identical and nothing was touched. The new content is
/// written to a temp file in the same directory and renamed over the target;
/// the temp file is removed on every failure path.
pub async fn atomic_write_if_changed(path: &Path, content: &str) -> Result<bool, StorageError> {
    if let Ok(current) = fs::read(path).await {
        if current == content.as_bytes() {
            debug!("Skipping write, content unchanged: {:?}", path);
            return Ok(false);
        }
    }

    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(dir)
        .await
        .map_err(|e| StorageError::io(dir, e))?;

    let tmp_path = temp_path_for(path)?;

    // Removes the temp file unless defused after a successful rename
    let cleanup = scopeguard::guard(tmp_path.clone(), |tmp| {
        let _ = std::fs::remove_file(tmp);
    });

    write_synced(&tmp_path, content.as_bytes())
        .await
        .map_err(|e| StorageError::io(&tmp_path, e))?;
    fs::rename(&tmp_path, path)
        .await
        .map_err(|e| StorageError::io(path, e))?;

    ScopeGuard::into_inner(cleanup);
    debug!("Wrote {} bytes to {:?}", content.len(), path);
    Ok(true)
}

/// Write `bytes` and flush them to disk before the file is closed
async fn write_synced(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = File::create(path).await?;
    file.write_all(bytes).await?;
    file.sync_all().await?;
    drop(file);
    Ok(())
}

/// `.<name>.tmp-<pid>` next to the target
fn temp_path_for(path: &Path) -> Result<PathBuf, StorageError> {
    let file_name = path
        .file_name()
        .ok_or_else(|| StorageError::InvalidPath(path.to_path_buf()))?;
    let tmp_name = format!(
        ".{}.tmp-{}",
        file_name.to_string_lossy(),
        std::process::id()
    );
    Ok(path.with_file_name(tmp_name))
}
