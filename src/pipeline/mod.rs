//! Pipeline stages for document text extraction.
//!
//! Each submodule implements exactly one step, so each can be tested without
//! the others and the remote call can be swapped for a mock.
//!
//! ## Data Flow
//!
//! ```text
//! input ──▶ detect ──▶ render
//! (path)    (Textract)  (lines + counts)
//! ```
//!
//! 1. [`input`]  — validate the extension, read the file, enforce the size ceiling
//! 2. [`detect`] — submit the bytes to `DetectDocumentText`; the only stage
//!    with network I/O
//! 3. [`render`] — single pass over the blocks: count pages, collect lines,
//!    estimate cost

pub mod detect;
pub mod input;
pub mod render;
