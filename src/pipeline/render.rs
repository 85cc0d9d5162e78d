//! Result rendering: one pass over the blocks, then the summary.
//!
//! Only two block types matter here. `PAGE` blocks are counted (Textract
//! bills per page) and `LINE` blocks are printed. `WORD` blocks duplicate
//! the line text one token at a time and are skipped, like every other type.

use crate::error::ScribeshotError;
use crate::output::{Block, BlockType, ExtractionStats};
use std::io::{self, Write};

/// What a single pass over the response yields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tally {
    /// Text of each `LINE` block, in list order.
    pub lines: Vec<String>,
    pub page_count: usize,
}

/// Count `PAGE` blocks and collect `LINE` text in one pass.
///
/// A `LINE` block without text is a malformed response and fails the whole
/// tally, so no partial output is ever rendered.
pub fn tally_blocks(blocks: &[Block]) -> Result<Tally, ScribeshotError> {
    let mut tally = Tally::default();
    for (index, block) in blocks.iter().enumerate() {
        match block.block_type {
            BlockType::Page => tally.page_count += 1,
            BlockType::Line => {
                let text = block
                    .text
                    .clone()
                    .ok_or_else(|| ScribeshotError::UnexpectedResponse {
                        detail: format!("LINE block {index} has no text"),
                    })?;
                tally.lines.push(text);
            }
            _ => {}
        }
    }
    Ok(tally)
}

/// Estimated charge for `pages` at `cost_per_page` USD each.
pub fn estimate_cost(pages: usize, cost_per_page: f64) -> f64 {
    pages as f64 * cost_per_page
}

/// Write each line followed by a newline.
pub fn write_lines<W: Write>(lines: &[String], mut out: W) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{line}")?;
    }
    out.flush()
}

/// The two diagnostic lines printed on stderr after a successful run.
pub fn summary_lines(stats: &ExtractionStats) -> [String; 2] {
    [
        format!(
            "Extracted {} lines of text from {} page(s)",
            stats.line_count, stats.page_count
        ),
        format!(
            "Estimated cost: ${:.4} USD (DetectDocumentText @ ${:.4} per page)",
            stats.estimated_cost_usd, stats.cost_per_page_usd
        ),
    ]
}
