//! Text detection: submit document bytes and get classified blocks back.
//!
//! [`TextDetector`] is the seam between this crate and the remote OCR
//! service. [`TextractDetector`] is the production implementation; tests
//! substitute a canned one so nothing touches the network.
//!
//! One call, no retry, no pagination: `DetectDocumentText` answers
//! synchronously with the full block list. Transport retries and TLS are the
//! SDK's business.

use crate::error::ScribeshotError;
use crate::output::{Block, BlockType};
use crate::session::Session;
use async_trait::async_trait;
use aws_sdk_textract::error::DisplayErrorContext;
use aws_sdk_textract::primitives::Blob;
use aws_sdk_textract::types::{self as textract, Document};
use aws_sdk_textract::Client;
use tracing::debug;

/// Something that can turn a document into text-detection blocks.
#[async_trait]
pub trait TextDetector: Send + Sync {
    /// Detect text in `bytes`, returning blocks in service order.
    async fn detect_document_text(&self, bytes: Vec<u8>) -> Result<Vec<Block>, ScribeshotError>;
}

/// [`TextDetector`] backed by AWS Textract.
#[derive(Debug, Clone)]
pub struct TextractDetector {
    client: Client,
}

impl TextractDetector {
    /// Build a Textract client from a bootstrapped session.
    pub fn new(session: &Session) -> Self {
        Self {
            client: Client::new(session.sdk_config()),
        }
    }
}

#[async_trait]
impl TextDetector for TextractDetector {
    async fn detect_document_text(&self, bytes: Vec<u8>) -> Result<Vec<Block>, ScribeshotError> {
        let document = Document::builder().bytes(Blob::new(bytes)).build();

        let response = self
            .client
            .detect_document_text()
            .document(document)
            .send()
            .await
            .map_err(|e| ScribeshotError::Api {
                message: DisplayErrorContext(&e).to_string(),
            })?;

        if let Some(meta) = response.document_metadata() {
            debug!("Textract reports {:?} page(s)", meta.pages());
        }

        convert_blocks(response.blocks())
    }
}

/// Convert SDK blocks, failing on the first one that is missing required fields.
pub fn convert_blocks(blocks: &[textract::Block]) -> Result<Vec<Block>, ScribeshotError> {
    blocks
        .iter()
        .enumerate()
        .map(|(i, b)| convert_block(i, b))
        .collect()
}

fn convert_block(index: usize, block: &textract::Block) -> Result<Block, ScribeshotError> {
    let block_type = block
        .block_type()
        .map(|t| BlockType::from_tag(t.as_str()))
        .ok_or_else(|| ScribeshotError::UnexpectedResponse {
            detail: format!("block {index} has no type"),
        })?;

    if block_type == BlockType::Line && block.text().is_none() {
        return Err(ScribeshotError::UnexpectedResponse {
            detail: format!("LINE block {index} has no text"),
        });
    }

    Ok(Block {
        block_type,
        text: block.text().map(str::to_owned),
        confidence: block.confidence(),
    })
}
