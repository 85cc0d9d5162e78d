//! # scribeshot
//!
//! Extract text from images and PDFs with AWS Textract.
//!
//! The document is validated locally (extension, size), sent to
//! `DetectDocumentText` in a single synchronous call, and the returned blocks
//! are reduced to the recognised text lines plus page count and an estimated
//! cost.
//!
//! ## Pipeline Overview
//!
//! ```text
//! file
//!  │
//!  ├─ 1. Session  resolve credentials + region (flag > env > profile > default)
//!  ├─ 2. Input    extension whitelist, read bytes, 10 MiB ceiling
//!  ├─ 3. Detect   one DetectDocumentText call
//!  └─ 4. Render   count PAGE blocks, collect LINE text, estimate cost
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use scribeshot::{extract, ExtractionConfig, Session, TextractDetector};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let session = Session::bootstrap(None, Some("us-east-1")).await?;
//!     let detector = TextractDetector::new(&session);
//!     let output = extract("receipt.jpg", &detector, &ExtractionConfig::default()).await?;
//!     for line in &output.lines {
//!         println!("{line}");
//!     }
//!     eprintln!("cost: ${:.4}", output.stats.estimated_cost_usd);
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `scribeshot` binary (clap + anyhow + tracing-subscriber + indicatif) |

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod error;
pub mod extract;
pub mod output;
pub mod pipeline;
pub mod progress;
pub mod session;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{
    ExtractionConfig, ExtractionConfigBuilder, MAX_DOCUMENT_BYTES, TEXTRACT_COST_PER_PAGE,
};
pub use error::ScribeshotError;
pub use extract::{extract, extract_sync};
pub use output::{Block, BlockType, ExtractionOutput, ExtractionStats};
pub use pipeline::detect::{TextDetector, TextractDetector};
pub use pipeline::input::SUPPORTED_EXTENSIONS;
pub use progress::{ExtractionProgressCallback, NoopProgressCallback, ProgressCallback};
pub use session::Session;
