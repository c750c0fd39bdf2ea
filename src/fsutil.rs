//! Filesystem helpers shared by the cache, avatar store and report writer

use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Sibling temporary path used while a file is being written
pub fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = OsString::from(".");
    name.push(path.file_name().unwrap_or_default());
    name.push(".tmp");
    path.with_file_name(name)
}

/// Write `contents` to `path` through a temporary sibling and a rename.
///
/// Readers see either the old file or the complete new one. On failure the
/// temporary file is removed and any existing file is left untouched.
pub async fn write_atomic(path: &Path, contents: impl AsRef<[u8]>) -> io::Result<()> {
    let tmp = temp_path_for(path);

    if let Err(e) = fs::write(&tmp, contents.as_ref()).await {
        let _ = fs::remove_file(&tmp).await;
        return Err(e);
    }

    if let Err(e) = fs::rename(&tmp, path).await {
        let _ = fs::remove_file(&tmp).await;
        return Err(e);
    }

    Ok(())
}

/// Create a directory tree unless it already exists
pub async fn ensure_dir(dir: &Path) -> io::Result<()> {
    if dir.as_os_str().is_empty() || dir.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(dir).await
}
