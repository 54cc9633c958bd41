use std::path::PathBuf;
use thiserror::Error;

/// Raised when directory traversal itself cannot proceed: missing scan
/// root, permission failure, or an unreadable entry. Per-file DICOM parse
/// failures are not errors and never surface here.
#[derive(Debug, Error)]
#[error("DICOM search failed under {}: {source}", path.display())]
pub struct ScanError {
    pub path: PathBuf,
    #[source]
    pub source: walkdir::Error,
}
