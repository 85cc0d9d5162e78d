//! Progress-callback trait for extraction events.
//!
//! Inject an [`Arc<dyn ExtractionProgressCallback>`] via
//! [`crate::config::ExtractionConfigBuilder::progress_callback`] to be told
//! when the document has been loaded and when the Textract request starts and
//! finishes. The library itself never writes to the terminal; the CLI uses
//! these hooks to print `Processing file: …` and drive a spinner.
//!
//! # Example
//!
//! ```rust
//! use scribeshot::{ExtractionConfig, ExtractionProgressCallback};
//! use std::path::Path;
//! use std::sync::Arc;
//!
//! struct Announce;
//!
//! impl ExtractionProgressCallback for Announce {
//!     fn on_document_loaded(&self, path: &Path, bytes: usize) {
//!         eprintln!("{} is {} bytes", path.display(), bytes);
//!     }
//! }
//!
//! let config = ExtractionConfig::builder()
//!     .progress_callback(Arc::new(Announce) as Arc<dyn ExtractionProgressCallback>)
//!     .build()
//!     .unwrap();
//! ```

use std::path::Path;
use std::sync::Arc;

/// Called by [`crate::extract::extract`] as the run advances.
///
/// All methods have default no-op implementations so callers only override
/// what they care about.
pub trait ExtractionProgressCallback: Send + Sync {
    /// Called once the file passed validation and has been read.
    ///
    /// # Arguments
    /// * `path`  — the input path as given
    /// * `bytes` — size of the document that will be submitted
    fn on_document_loaded(&self, path: &Path, bytes: usize) {
        let _ = (path, bytes);
    }

    /// Called just before the Textract request is sent.
    fn on_request_start(&self) {}

    /// Called when the response was received and decoded.
    ///
    /// # Arguments
    /// * `block_count` — number of blocks in the response
    /// * `elapsed_ms`  — wall-clock duration of the call
    fn on_request_complete(&self, block_count: usize, elapsed_ms: u64) {
        let _ = (block_count, elapsed_ms);
    }

    /// Called when the request failed or the response was malformed.
    fn on_request_error(&self, error: &str) {
        let _ = error;
    }
}

/// A no-op implementation for callers that don't need progress events.
pub struct NoopProgressCallback;

impl ExtractionProgressCallback for NoopProgressCallback {}

/// Convenience alias matching the type stored in [`crate::config::ExtractionConfig`].
pub type ProgressCallback = Arc<dyn ExtractionProgressCallback>;
