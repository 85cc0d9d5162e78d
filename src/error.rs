//! Error type for the scribeshot library.
//!
//! Every failure is fatal for the single invocation: a bad input file, an
//! unresolvable region, a rejected API call. Nothing is retried locally, so a
//! single enum is enough. Variants are grouped by where they arise so the CLI
//! can print a message that tells the user what to fix.

use std::path::PathBuf;
use thiserror::Error;

/// All errors returned by the scribeshot library.
#[derive(Debug, Error)]
pub enum ScribeshotError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// Input file was not found at the given path.
    #[error("File '{}' does not exist", .path.display())]
    FileNotFound { path: PathBuf },

    /// Process does not have read permission on the file.
    #[error("Permission denied reading '{}'\nTry: chmod +r {path:?}", .path.display())]
    PermissionDenied { path: PathBuf },

    /// The file exists but could not be read.
    #[error("failed to read file: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Extension is not one Textract accepts for synchronous detection.
    #[error("unsupported file type: {extension} (supported: PDF, JPG, JPEG, PNG, TIFF)")]
    UnsupportedFileType { extension: String },

    /// Document is larger than the synchronous API accepts.
    #[error("file size ({size} bytes) exceeds Textract limit of {limit} bytes")]
    FileTooLarge { size: usize, limit: usize },

    // ── Config errors ─────────────────────────────────────────────────────
    /// No region could be resolved from flag, environment or profile.
    #[error(
        "no AWS region configured. Please set a region via:\n  \
1. --region flag\n  \
2. AWS_REGION environment variable\n  \
3. [{profile}] section in ~/.aws/config with region setting\n  \
4. [default] section in ~/.aws/config with region setting"
    )]
    RegionNotConfigured { profile: String },

    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ── Remote errors ─────────────────────────────────────────────────────
    /// The Textract call itself failed (auth, throttling, bad document …).
    #[error("Textract API error: {message}")]
    Api { message: String },

    /// The response arrived but a block is missing a required field.
    #[error("unexpected Textract response: {detail}")]
    UnexpectedResponse { detail: String },

    // ── Catch-all ─────────────────────────────────────────────────────────
    /// Unexpected internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}
