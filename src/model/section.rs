//! Output records: titled sections and stamped section records.

use serde::{Deserialize, Serialize};

/// A titled unit of document structure attributed to one page.
///
/// Equality and hashing cover exactly (title, text, page); the repair
/// pass relies on that key to drop structurally identical sections.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Section {
    /// Section title
    pub title: String,

    /// Accumulated body text
    pub text: String,

    /// Zero-based index of the page the section started on
    pub page: u32,
}

impl Section {
    /// Create an empty section for the given page.
    pub fn new(page: u32) -> Self {
        Self {
            title: String::new(),
            text: String::new(),
            page,
        }
    }

    /// Create a section from its parts.
    pub fn from_parts(title: impl Into<String>, text: impl Into<String>, page: u32) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
            page,
        }
    }

    /// Check if both title and text are empty.
    pub fn is_blank(&self) -> bool {
        self.title.is_empty() && self.text.is_empty()
    }
}

/// A section with document-level metadata stamped onto it.
///
/// Field declaration order is the serialized output order: the section
/// fields first, then the stamped metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionRecord {
    /// Section title
    pub title: String,

    /// Accumulated body text
    pub text: String,

    /// Zero-based index of the page the section started on
    pub page: u32,

    /// Source file name (basename only)
    pub file: String,

    /// Product name, taken from the first section's title
    pub product: String,

    /// Document name, taken from the first section's title
    pub document: String,

    /// Public link to the source file
    pub link: String,
}
