//! Result types: detected blocks and the extraction summary.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a Textract block.
///
/// Only `PAGE` and `LINE` drive rendering; everything else the service may
/// return (`KEY_VALUE_SET`, `TABLE`, `CELL`, …) is carried verbatim in
/// [`BlockType::Other`] so nothing is lost when the blocks are serialised.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum BlockType {
    Page,
    Line,
    Word,
    Other(String),
}

impl BlockType {
    /// Map a service type tag (e.g. `"LINE"`) to a `BlockType`.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "PAGE" => BlockType::Page,
            "LINE" => BlockType::Line,
            "WORD" => BlockType::Word,
            other => BlockType::Other(other.to_string()),
        }
    }

    pub fn as_tag(&self) -> &str {
        match self {
            BlockType::Page => "PAGE",
            BlockType::Line => "LINE",
            BlockType::Word => "WORD",
            BlockType::Other(tag) => tag,
        }
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

impl From<String> for BlockType {
    fn from(tag: String) -> Self {
        BlockType::from_tag(&tag)
    }
}

impl From<BlockType> for String {
    fn from(t: BlockType) -> Self {
        t.as_tag().to_string()
    }
}

/// One classified element of a text-detection response, in service order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub block_type: BlockType,
    /// Recognised text. Always present on `LINE` and `WORD` blocks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Service confidence, 0–100.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f32>,
}

impl Block {
    pub fn page() -> Self {
        Self {
            block_type: BlockType::Page,
            text: None,
            confidence: None,
        }
    }

    pub fn line(text: impl Into<String>) -> Self {
        Self {
            block_type: BlockType::Line,
            text: Some(text.into()),
            confidence: None,
        }
    }

    pub fn word(text: impl Into<String>) -> Self {
        Self {
            block_type: BlockType::Word,
            text: Some(text.into()),
            confidence: None,
        }
    }
}

/// Everything produced by one extraction run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionOutput {
    /// Text of every `LINE` block, in document order.
    pub lines: Vec<String>,
    pub stats: ExtractionStats,
}

/// Counters and the cost estimate reported on stderr after a run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractionStats {
    pub line_count: usize,
    pub page_count: usize,
    /// Total blocks in the response, of any type.
    pub block_count: usize,
    /// Size of the submitted document.
    pub document_bytes: usize,
    pub cost_per_page_usd: f64,
    /// `page_count × cost_per_page_usd`.
    pub estimated_cost_usd: f64,
    /// Wall-clock time spent in the API call.
    pub api_duration_ms: u64,
}
