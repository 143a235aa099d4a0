use std::fs;
use std::path::{Path, PathBuf};

use crate::host::{DocumentError, RopeHost};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Read an mbox file into a rope host
///
/// Archives are often 8-bit text in a legacy charset. Bytes that are not
/// valid UTF-8 are replaced with U+FFFD rather than rejected.
pub fn read_mbox(path: &Path) -> Result<RopeHost, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    let bytes = fs::read(path)?;
    log::debug!("read {} bytes from {}", bytes.len(), path.display());
    match RopeHost::from_bytes(&bytes) {
        Ok(host) => Ok(host),
        Err(DocumentError::InvalidUtf8(e)) => {
            log::warn!("{}: {e}; replacing invalid bytes", path.display());
            Ok(RopeHost::from(String::from_utf8_lossy(&bytes).as_ref()))
        }
    }
}

/// Write the host buffer back to disk
pub fn write_mbox(path: &Path, host: &RopeHost) -> Result<(), IoError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, host.to_bytes()).map_err(IoError::Io)
}
