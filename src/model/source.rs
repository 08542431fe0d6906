//! Source-side types: pages of styled text spans.
//!
//! These types are produced by the extraction layer, not by this
//! crate. An extractor walks a rendered document and reports, per
//! page, its blocks, lines, and styled spans in reading order.

use serde::{Deserialize, Serialize};

/// The smallest unit of styled text: a run of characters sharing one
/// font size, font family, and color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextSpan {
    /// The text content (may be whitespace-only)
    pub text: String,

    /// Font size in points
    pub size: f32,

    /// Font family name (e.g., "Helvetica-Bold")
    pub font: String,

    /// Packed sRGB text color
    pub color: u32,
}

impl TextSpan {
    /// Create a new text span.
    pub fn new(text: impl Into<String>, size: f32, font: impl Into<String>, color: u32) -> Self {
        Self {
            text: text.into(),
            size,
            font: font.into(),
            color,
        }
    }

    /// Check whether the span carries no visible text.
    ///
    /// Blank spans still carry a countable style, but they are
    /// invisible to block segmentation.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// A line of spans as reported by the extraction layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextLine {
    /// The spans in this line, in reading order
    pub spans: Vec<TextSpan>,
}

impl TextLine {
    /// Create a new line from spans.
    pub fn new(spans: Vec<TextSpan>) -> Self {
        Self { spans }
    }

    /// Check if the line has no spans.
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }
}

/// A top-level content block on a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PageBlock {
    /// A block of text lines
    Text {
        /// The lines in this block, in reading order
        lines: Vec<TextLine>,
    },

    /// A non-text block (image or drawing); skipped by every analysis
    /// stage
    Image,
}

impl PageBlock {
    /// Create a text block from lines.
    pub fn text(lines: Vec<TextLine>) -> Self {
        PageBlock::Text { lines }
    }

    /// Check if this block contains text lines.
    pub fn is_text(&self) -> bool {
        matches!(self, PageBlock::Text { .. })
    }
}

/// A single page of extracted content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// Page index (zero-based)
    pub index: u32,

    /// Content blocks on the page, in reading order
    pub blocks: Vec<PageBlock>,
}

impl Page {
    /// Create a new empty page.
    pub fn new(index: u32) -> Self {
        Self {
            index,
            blocks: Vec::new(),
        }
    }

    /// Create a page with the given blocks.
    pub fn with_blocks(index: u32, blocks: Vec<PageBlock>) -> Self {
        Self { index, blocks }
    }

    /// Add a block to the page.
    pub fn add_block(&mut self, block: PageBlock) {
        self.blocks.push(block);
    }

    /// Count the spans in text blocks on this page.
    pub fn span_count(&self) -> usize {
        self.blocks
            .iter()
            .map(|block| match block {
                PageBlock::Text { lines } => {
                    lines.iter().map(|line| line.spans.len()).sum::<usize>()
                }
                PageBlock::Image => 0,
            })
            .sum()
    }

    /// Check if the page has no blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}
