//! Input validation: turn a user-supplied path into submit-ready bytes.
//!
//! Textract's synchronous API takes the whole document inline, so the file is
//! read fully into memory. The cheap checks (extension, then size) run before
//! anything leaves the machine so a bad input never costs an API call.

use crate::error::ScribeshotError;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Extensions accepted by `DetectDocumentText`, lowercase and without the dot.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["pdf", "jpg", "jpeg", "png", "tiff", "tif"];

/// The raw bytes of a validated input document.
#[derive(Debug, Clone)]
pub struct DocumentBytes {
    path: PathBuf,
    bytes: Vec<u8>,
}

impl DocumentBytes {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Give up the buffer for submission.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

/// Check the extension of `path` against [`SUPPORTED_EXTENSIONS`].
///
/// The comparison ignores ASCII case, so `SCAN.PDF` is accepted.
pub fn check_extension(path: &Path) -> Result<(), ScribeshotError> {
    let ext = path.extension().and_then(|e| e.to_str());
    match ext {
        Some(e) if SUPPORTED_EXTENSIONS.iter().any(|s| s.eq_ignore_ascii_case(e)) => Ok(()),
        Some(e) => Err(ScribeshotError::UnsupportedFileType {
            extension: format!(".{e}"),
        }),
        None => Err(ScribeshotError::UnsupportedFileType {
            extension: "(none)".to_string(),
        }),
    }
}

/// Validate and read a document: extension, then read, then size.
pub async fn load_document(
    path: impl AsRef<Path>,
    max_bytes: usize,
) -> Result<DocumentBytes, ScribeshotError> {
    let path = path.as_ref();
    check_extension(path)?;

    let bytes = tokio::fs::read(path).await.map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => ScribeshotError::FileNotFound {
            path: path.to_path_buf(),
        },
        std::io::ErrorKind::PermissionDenied => ScribeshotError::PermissionDenied {
            path: path.to_path_buf(),
        },
        _ => ScribeshotError::ReadFailed {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    if bytes.len() > max_bytes {
        return Err(ScribeshotError::FileTooLarge {
            size: bytes.len(),
            limit: max_bytes,
        });
    }

    debug!("Loaded {} ({} bytes)", path.display(), bytes.len());
    Ok(DocumentBytes {
        path: path.to_path_buf(),
        bytes,
    })
}
