//! Extraction entry points.
//!
//! [`extract`] runs the whole pipeline for one document against any
//! [`TextDetector`]; the CLI passes a [`crate::pipeline::detect::TextractDetector`],
//! tests pass a canned one. Nothing is written to stdout here: the caller
//! decides how to present [`ExtractionOutput`].

use crate::config::ExtractionConfig;
use crate::error::ScribeshotError;
use crate::output::{ExtractionOutput, ExtractionStats};
use crate::pipeline::detect::TextDetector;
use crate::pipeline::{input, render};
use std::path::Path;
use std::time::Instant;
use tracing::info;

/// Extract the text lines of an image or PDF.
///
/// # Arguments
/// * `path`     — local file; must be PDF, JPEG, PNG or TIFF
/// * `detector` — the OCR backend
/// * `config`   — size ceiling, cost rate, progress hooks
///
/// # Errors
/// Input errors are returned before `detector` is called. Detector errors
/// are passed through unchanged.
pub async fn extract<D>(
    path: impl AsRef<Path>,
    detector: &D,
    config: &ExtractionConfig,
) -> Result<ExtractionOutput, ScribeshotError>
where
    D: TextDetector + ?Sized,
{
    let path = path.as_ref();

    // ── Step 1: Validate and read ────────────────────────────────────────
    let document = input::load_document(path, config.max_document_bytes).await?;
    let document_bytes = document.len();
    if let Some(ref cb) = config.progress_callback {
        cb.on_document_loaded(path, document_bytes);
    }

    // ── Step 2: Detect ───────────────────────────────────────────────────
    if let Some(ref cb) = config.progress_callback {
        cb.on_request_start();
    }
    let api_start = Instant::now();
    let blocks = match detector.detect_document_text(document.into_bytes()).await {
        Ok(blocks) => blocks,
        Err(e) => {
            if let Some(ref cb) = config.progress_callback {
                cb.on_request_error(&e.to_string());
            }
            return Err(e);
        }
    };
    let api_duration_ms = api_start.elapsed().as_millis() as u64;
    if let Some(ref cb) = config.progress_callback {
        cb.on_request_complete(blocks.len(), api_duration_ms);
    }

    // ── Step 3: Tally ────────────────────────────────────────────────────
    let tally = render::tally_blocks(&blocks)?;
    let stats = ExtractionStats {
        line_count: tally.lines.len(),
        page_count: tally.page_count,
        block_count: blocks.len(),
        document_bytes,
        cost_per_page_usd: config.cost_per_page,
        estimated_cost_usd: render::estimate_cost(tally.page_count, config.cost_per_page),
        api_duration_ms,
    };

    info!(
        "Extraction complete: {} lines, {} pages, {} blocks in {}ms",
        stats.line_count, stats.page_count, stats.block_count, api_duration_ms
    );

    Ok(ExtractionOutput {
        lines: tally.lines,
        stats,
    })
}

/// Synchronous wrapper around [`extract`].
///
/// Creates a temporary current-thread tokio runtime internally; do not call
/// from inside an async context.
pub fn extract_sync<D>(
    path: impl AsRef<Path>,
    detector: &D,
    config: &ExtractionConfig,
) -> Result<ExtractionOutput, ScribeshotError>
where
    D: TextDetector + ?Sized,
{
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| ScribeshotError::Internal(format!("Failed to create tokio runtime: {}", e)))?
        .block_on(extract(path, detector, config))
}
