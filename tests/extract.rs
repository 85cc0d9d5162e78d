//! Library-level tests for the extraction pipeline.
//!
//! A canned [`TextDetector`] stands in for Textract, so these run offline and
//! can assert that validation failures never reach the detector.

use async_trait::async_trait;
use scribeshot::pipeline::render::{summary_lines, write_lines};
use scribeshot::{
    extract, extract_sync, Block, BlockType, ExtractionConfig, ExtractionProgressCallback,
    ScribeshotError, TextDetector, MAX_DOCUMENT_BYTES,
};
use std::io::Write;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tempfile::NamedTempFile;

// ── Test helpers ─────────────────────────────────────────────────────────────

/// Returns the same response every time and counts how often it was asked.
struct CannedDetector {
    response: Result<Vec<Block>, String>,
    calls: AtomicUsize,
    last_len: AtomicUsize,
}

impl CannedDetector {
    fn ok(blocks: Vec<Block>) -> Self {
        Self {
            response: Ok(blocks),
            calls: AtomicUsize::new(0),
            last_len: AtomicUsize::new(0),
        }
    }

    fn failing(message: &str) -> Self {
        Self {
            response: Err(message.to_string()),
            calls: AtomicUsize::new(0),
            last_len: AtomicUsize::new(0),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextDetector for CannedDetector {
    async fn detect_document_text(&self, bytes: Vec<u8>) -> Result<Vec<Block>, ScribeshotError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.last_len.store(bytes.len(), Ordering::SeqCst);
        match &self.response {
            Ok(blocks) => Ok(blocks.clone()),
            Err(message) => Err(ScribeshotError::Api {
                message: message.clone(),
            }),
        }
    }
}

fn temp_doc(suffix: &str, contents: &[u8]) -> NamedTempFile {
    let mut f = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("create temp file");
    f.write_all(contents).expect("write temp file");
    f
}

fn two_page_response() -> Vec<Block> {
    vec![
        Block::page(),
        Block::line("ACME Corp"),
        Block::word("ACME"),
        Block::word("Corp"),
        Block::line("Invoice #1042"),
        Block::page(),
        Block::line("Total: $99.00"),
        Block {
            block_type: BlockType::Other("KEY_VALUE_SET".into()),
            text: None,
            confidence: Some(87.0),
        },
    ]
}

// ── Validation never reaches the detector ───────────────────────────────────

#[tokio::test]
async fn unsupported_extension_skips_api() {
    let doc = temp_doc(".docx", b"not an image");
    let detector = CannedDetector::ok(two_page_response());

    let err = extract(doc.path(), &detector, &ExtractionConfig::default())
        .await
        .unwrap_err();

    assert!(matches!(err, ScribeshotError::UnsupportedFileType { .. }), "got: {err}");
    assert_eq!(detector.calls(), 0);
}

#[tokio::test]
async fn oversized_file_skips_api() {
    let doc = temp_doc(".pdf", &vec![0u8; MAX_DOCUMENT_BYTES + 1]);
    let detector = CannedDetector::ok(two_page_response());

    let err = extract(doc.path(), &detector, &ExtractionConfig::default())
        .await
        .unwrap_err();

    match err {
        ScribeshotError::FileTooLarge { size, limit } => {
            assert_eq!(size, MAX_DOCUMENT_BYTES + 1);
            assert_eq!(limit, MAX_DOCUMENT_BYTES);
        }
        other => panic!("unexpected: {other}"),
    }
    assert_eq!(detector.calls(), 0);
}

#[tokio::test]
async fn file_at_limit_is_submitted() {
    let doc = temp_doc(".pdf", &vec![0u8; MAX_DOCUMENT_BYTES]);
    let detector = CannedDetector::ok(vec![Block::page()]);

    let out = extract(doc.path(), &detector, &ExtractionConfig::default())
        .await
        .expect("exactly 10 MiB is allowed");

    assert_eq!(detector.calls(), 1);
    assert_eq!(detector.last_len.load(Ordering::SeqCst), MAX_DOCUMENT_BYTES);
    assert_eq!(out.stats.document_bytes, MAX_DOCUMENT_BYTES);
}

#[tokio::test]
async fn missing_file_skips_api() {
    let detector = CannedDetector::ok(two_page_response());
    let err = extract("/no/such/dir/scan.png", &detector, &ExtractionConfig::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ScribeshotError::FileNotFound { .. }), "got: {err}");
    assert_eq!(detector.calls(), 0);
}

// ── Rendering ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn lines_and_pages_from_mocked_response() {
    let doc = temp_doc(".pdf", b"%PDF-1.7 tiny");
    let detector = CannedDetector::ok(two_page_response());

    let out = extract(doc.path(), &detector, &ExtractionConfig::default())
        .await
        .expect("extraction should succeed");

    assert_eq!(out.lines, vec!["ACME Corp", "Invoice #1042", "Total: $99.00"]);
    assert_eq!(out.stats.line_count, 3);
    assert_eq!(out.stats.page_count, 2);
    assert_eq!(out.stats.block_count, 8);
    assert_eq!(out.stats.document_bytes, 13);

    let mut stdout = Vec::new();
    write_lines(&out.lines, &mut stdout).unwrap();
    assert_eq!(
        String::from_utf8(stdout).unwrap(),
        "ACME Corp\nInvoice #1042\nTotal: $99.00\n"
    );

    let [extracted, cost] = summary_lines(&out.stats);
    assert_eq!(extracted, "Extracted 3 lines of text from 2 page(s)");
    assert_eq!(
        cost,
        "Estimated cost: $0.0030 USD (DetectDocumentText @ $0.0015 per page)"
    );
}

#[tokio::test]
async fn custom_rate_changes_estimate() {
    let doc = temp_doc(".png", b"\x89PNG");
    let detector = CannedDetector::ok(two_page_response());
    let config = ExtractionConfig::builder()
        .cost_per_page(0.01)
        .build()
        .unwrap();

    let out = extract(doc.path(), &detector, &config).await.unwrap();
    assert_eq!(format!("{:.4}", out.stats.estimated_cost_usd), "0.0200");
}

#[tokio::test]
async fn empty_response_reports_zero() {
    let doc = temp_doc(".jpg", b"\xff\xd8\xff");
    let detector = CannedDetector::ok(vec![]);

    let out = extract(doc.path(), &detector, &ExtractionConfig::default())
        .await
        .unwrap();

    assert!(out.lines.is_empty());
    let [extracted, cost] = summary_lines(&out.stats);
    assert_eq!(extracted, "Extracted 0 lines of text from 0 page(s)");
    assert!(cost.starts_with("Estimated cost: $0.0000 USD"), "got: {cost}");
}

#[tokio::test]
async fn repeated_runs_are_identical() {
    let doc = temp_doc(".tiff", b"II*\0");
    let detector = CannedDetector::ok(two_page_response());
    let config = ExtractionConfig::default();

    let mut first = Vec::new();
    let mut second = Vec::new();
    let a = extract(doc.path(), &detector, &config).await.unwrap();
    write_lines(&a.lines, &mut first).unwrap();
    let b = extract(doc.path(), &detector, &config).await.unwrap();
    write_lines(&b.lines, &mut second).unwrap();

    assert_eq!(first, second);
    assert_eq!(summary_lines(&a.stats), summary_lines(&b.stats));
    assert_eq!(detector.calls(), 2);
}

// ── Errors and callbacks ────────────────────────────────────────────────────

#[tokio::test]
async fn api_error_passes_through() {
    let doc = temp_doc(".pdf", b"%PDF");
    let detector = CannedDetector::failing("UnsupportedDocumentException: bad format");

    let err = extract(doc.path(), &detector, &ExtractionConfig::default())
        .await
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Textract API error: UnsupportedDocumentException: bad format"
    );
    assert_eq!(detector.calls(), 1);
}

#[tokio::test]
async fn line_without_text_fails_extraction() {
    let doc = temp_doc(".png", b"\x89PNG");
    let detector = CannedDetector::ok(vec![
        Block::page(),
        Block {
            block_type: BlockType::Line,
            text: None,
            confidence: None,
        },
    ]);

    let err = extract(doc.path(), &detector, &ExtractionConfig::default())
        .await
        .unwrap_err();

    assert!(
        matches!(err, ScribeshotError::UnexpectedResponse { .. }),
        "got: {err}"
    );
    assert_eq!(
        err.to_string(),
        "unexpected Textract response: LINE block 1 has no text"
    );
    assert_eq!(detector.calls(), 1);
}

#[derive(Default)]
struct RecordingCallback {
    events: Mutex<Vec<String>>,
}

impl ExtractionProgressCallback for RecordingCallback {
    fn on_document_loaded(&self, _path: &Path, bytes: usize) {
        self.events.lock().unwrap().push(format!("loaded {bytes}"));
    }

    fn on_request_start(&self) {
        self.events.lock().unwrap().push("start".into());
    }

    fn on_request_complete(&self, block_count: usize, _elapsed_ms: u64) {
        self.events
            .lock()
            .unwrap()
            .push(format!("complete {block_count}"));
    }

    fn on_request_error(&self, _error: &str) {
        self.events.lock().unwrap().push("error".into());
    }
}

#[tokio::test]
async fn callbacks_fire_in_order() {
    let doc = temp_doc(".pdf", b"12345");
    let detector = CannedDetector::ok(two_page_response());
    let recorder = Arc::new(RecordingCallback::default());
    let config = ExtractionConfig::builder()
        .progress_callback(recorder.clone())
        .build()
        .unwrap();

    extract(doc.path(), &detector, &config).await.unwrap();

    assert_eq!(
        *recorder.events.lock().unwrap(),
        vec!["loaded 5", "start", "complete 8"]
    );
}

#[tokio::test]
async fn callbacks_report_api_failure() {
    let doc = temp_doc(".pdf", b"12345");
    let detector = CannedDetector::failing("ThrottlingException");
    let recorder = Arc::new(RecordingCallback::default());
    let config = ExtractionConfig::builder()
        .progress_callback(recorder.clone())
        .build()
        .unwrap();

    assert!(extract(doc.path(), &detector, &config).await.is_err());
    assert_eq!(
        *recorder.events.lock().unwrap(),
        vec!["loaded 5", "start", "error"]
    );
}

#[test]
fn sync_wrapper_matches_async() {
    let doc = temp_doc(".pdf", b"%PDF");
    let detector = CannedDetector::ok(two_page_response());

    let out = extract_sync(doc.path(), &detector, &ExtractionConfig::default()).unwrap();
    assert_eq!(out.stats.page_count, 2);
    assert_eq!(out.lines.len(), 3);
}

#[tokio::test]
async fn output_serialises_to_json() {
    let doc = temp_doc(".pdf", b"%PDF");
    let detector = CannedDetector::ok(two_page_response());
    let out = extract(doc.path(), &detector, &ExtractionConfig::default())
        .await
        .unwrap();

    let json = serde_json::to_value(&out).expect("ExtractionOutput must serialise");
    assert_eq!(json["stats"]["page_count"], 2);
    assert_eq!(json["lines"][1], "Invoice #1042");
}
