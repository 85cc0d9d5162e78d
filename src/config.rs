//! Configuration for a text-extraction run.
//!
//! Region and profile are not here: they only matter to
//! [`crate::session::Session::bootstrap`], which runs before a config is
//! needed. This struct covers what happens to the document itself.

use crate::error::ScribeshotError;
use crate::progress::ProgressCallback;
use std::fmt;

/// Largest document accepted by synchronous `DetectDocumentText` (10 MiB).
pub const MAX_DOCUMENT_BYTES: usize = 10 * 1024 * 1024;

/// `DetectDocumentText` list price in USD per page (first 1M pages/month).
pub const TEXTRACT_COST_PER_PAGE: f64 = 0.0015;

/// Configuration for one extraction.
///
/// Built via [`ExtractionConfig::builder()`] or using
/// [`ExtractionConfig::default()`].
///
/// # Example
/// ```rust
/// use scribeshot::ExtractionConfig;
///
/// let config = ExtractionConfig::builder()
///     .max_document_bytes(5 * 1024 * 1024)
///     .build()
///     .unwrap();
/// assert_eq!(config.cost_per_page, 0.0015);
/// ```
#[derive(Clone)]
pub struct ExtractionConfig {
    /// Documents larger than this are rejected before any API call.
    /// Default and upper bound: [`MAX_DOCUMENT_BYTES`].
    pub max_document_bytes: usize,

    /// Price per page used for the cost estimate. Default: [`TEXTRACT_COST_PER_PAGE`].
    pub cost_per_page: f64,

    /// Optional progress hooks.
    pub progress_callback: Option<ProgressCallback>,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            max_document_bytes: MAX_DOCUMENT_BYTES,
            cost_per_page: TEXTRACT_COST_PER_PAGE,
            progress_callback: None,
        }
    }
}

impl fmt::Debug for ExtractionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtractionConfig")
            .field("max_document_bytes", &self.max_document_bytes)
            .field("cost_per_page", &self.cost_per_page)
            .field(
                "progress_callback",
                &self
                    .progress_callback
                    .as_ref()
                    .map(|_| "<dyn ExtractionProgressCallback>"),
            )
            .finish()
    }
}

impl ExtractionConfig {
    /// Create a new builder for `ExtractionConfig`.
    pub fn builder() -> ExtractionConfigBuilder {
        ExtractionConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`ExtractionConfig`].
#[derive(Debug)]
pub struct ExtractionConfigBuilder {
    config: ExtractionConfig,
}

impl ExtractionConfigBuilder {
    pub fn max_document_bytes(mut self, n: usize) -> Self {
        self.config.max_document_bytes = n;
        self
    }

    pub fn cost_per_page(mut self, usd: f64) -> Self {
        self.config.cost_per_page = usd;
        self
    }

    pub fn progress_callback(mut self, cb: ProgressCallback) -> Self {
        self.config.progress_callback = Some(cb);
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<ExtractionConfig, ScribeshotError> {
        let c = &self.config;
        if c.max_document_bytes == 0 || c.max_document_bytes > MAX_DOCUMENT_BYTES {
            return Err(ScribeshotError::InvalidConfig(format!(
                "max document size must be 1–{} bytes, got {}",
                MAX_DOCUMENT_BYTES, c.max_document_bytes
            )));
        }
        if !c.cost_per_page.is_finite() || c.cost_per_page < 0.0 {
            return Err(ScribeshotError::InvalidConfig(format!(
                "cost per page must be a non-negative number, got {}",
                c.cost_per_page
            )));
        }
        Ok(self.config)
    }
}
