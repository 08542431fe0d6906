//! Span grouping into tagged fragments.
//!
//! Consecutive spans sharing one style identifier form a single
//! fragment carrying that style's tag. Whitespace-only spans are
//! invisible here: they neither open, extend, nor close a fragment.
//! Grouping state is per block; every block starts fresh.

use serde::{Deserialize, Serialize};

use crate::model::{Page, PageBlock, TextLine};

use super::catalog::StyleId;
use super::tags::{Tag, TagMap};

/// One contiguous same-style run of span text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedFragment {
    /// Structural tag, or `None` when the style had no entry in the
    /// page's tag map
    pub tag: Option<Tag>,

    /// Span text joined with single spaces
    pub text: String,
}

impl TaggedFragment {
    /// Create a new fragment.
    pub fn new(tag: Option<Tag>, text: impl Into<String>) -> Self {
        Self {
            tag,
            text: text.into(),
        }
    }

    /// Check if this fragment is a heading.
    pub fn is_heading(&self) -> bool {
        matches!(self.tag, Some(Tag::Heading(_)))
    }

    /// Check if this fragment is body text.
    pub fn is_body(&self) -> bool {
        matches!(self.tag, Some(Tag::Body))
    }
}

/// Group one block's spans into tagged fragments.
///
/// A style change closes the open fragment and starts a new one; a
/// span matching the previous style is appended after a single space.
/// Span text goes in raw, untrimmed.
pub fn segment_block(lines: &[TextLine], tags: &TagMap) -> Vec<TaggedFragment> {
    let mut fragments = Vec::new();
    let mut open: Option<TaggedFragment> = None;
    let mut previous: Option<StyleId> = None;

    for line in lines {
        for span in &line.spans {
            if span.is_blank() {
                continue;
            }
            let id = StyleId::granular(span);
            if previous.as_ref() == Some(&id) {
                if let Some(fragment) = open.as_mut() {
                    fragment.text.push(' ');
                    fragment.text.push_str(&span.text);
                }
            } else {
                if let Some(done) = open.take() {
                    fragments.push(done);
                }
                open = Some(TaggedFragment::new(tags.get(&id), span.text.clone()));
                previous = Some(id);
            }
        }
    }

    // Don't forget the last fragment
    if let Some(done) = open {
        fragments.push(done);
    }

    fragments
}

/// Group every text block on a page into fragments, in block order.
pub fn segment_page(page: &Page, tags: &TagMap) -> Vec<TaggedFragment> {
    let mut fragments = Vec::new();
    for block in &page.blocks {
        match block {
            PageBlock::Text { lines } => fragments.extend(segment_block(lines, tags)),
            PageBlock::Image => {}
        }
    }
    fragments
}
