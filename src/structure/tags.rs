//! Heading/body tag assignment.
//!
//! The most frequent style on a page is its body text. Every other
//! distinct style is ranked by walking the styles in a fixed order
//! (size descending, then font name, then color) and numbering heading
//! styles as they are encountered, so `Heading(1)` is always the
//! largest non-body style on the page. Numbering restarts on every
//! page; two pages can map the same physical size to different levels.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use super::catalog::{SpanStyle, StyleCatalog, StyleId};

/// Structural designation for one span style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tag {
    /// Ordinary paragraph text
    Body,

    /// A heading at the given level (1 = most prominent)
    Heading(u8),
}

impl Tag {
    /// Check if this tag marks a heading.
    pub fn is_heading(self) -> bool {
        matches!(self, Tag::Heading(_))
    }

    /// The heading level, if any.
    pub fn heading_level(self) -> Option<u8> {
        match self {
            Tag::Heading(level) => Some(level),
            Tag::Body => None,
        }
    }
}

/// Per-page mapping from style identifier to tag.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TagMap {
    tags: HashMap<StyleId, Tag>,
}

impl TagMap {
    /// Assign a tag to every distinct style in a page catalog.
    ///
    /// The dominant style always maps to [`Tag::Body`]. A style
    /// becomes a heading when its size is strictly larger than the
    /// dominant size, or equal in size but different in font or color.
    /// Styles smaller than the dominant stay body text.
    pub fn assign(catalog: &StyleCatalog) -> Self {
        let dominant = catalog.dominant();

        // Distinct (size, font, color) triples, first-encounter order.
        let mut seen = HashSet::new();
        let mut styles: Vec<&SpanStyle> = Vec::new();
        for (_, entry) in catalog.entries() {
            if seen.insert(entry.style.id()) {
                styles.push(&entry.style);
            }
        }

        // Size descending, then font name, then color. Sizes are
        // finite here; the catalog rejects anything else.
        styles.sort_by(|a, b| {
            b.size
                .total_cmp(&a.size)
                .then_with(|| a.font.cmp(&b.font))
                .then_with(|| a.color.cmp(&b.color))
        });

        let mut tags = HashMap::with_capacity(styles.len());
        let mut level: u8 = 1;
        for style in styles {
            let tag = if style == dominant {
                Tag::Body
            } else if style.size > dominant.size
                || (style.size == dominant.size
                    && (style.font != dominant.font || style.color != dominant.color))
            {
                let assigned = Tag::Heading(level);
                level = level.saturating_add(1);
                assigned
            } else {
                Tag::Body
            };
            tags.insert(style.id(), tag);
        }

        log::debug!(
            "page {}: tagged {} styles, {} heading levels",
            catalog.page(),
            tags.len(),
            level - 1
        );

        TagMap { tags }
    }

    /// Look up the tag for a style identifier.
    pub fn get(&self, id: &StyleId) -> Option<Tag> {
        self.tags.get(id).copied()
    }

    /// Number of styles with assigned tags.
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Check if no tags were assigned.
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}
