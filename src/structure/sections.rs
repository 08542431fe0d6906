//! Section folding for a single page.
//!
//! Walks a page's tagged fragments in order and folds them into
//! `Section` values: each heading opens a new section, body text
//! accumulates under the most recent title. A page whose first visible
//! fragment is body text gets that text promoted to the title slot, so
//! every non-empty page yields at least one titled section.

use crate::model::Section;

use super::segment::TaggedFragment;
use super::tags::Tag;

/// Fold one page's fragments into sections.
pub fn structure_fragments(fragments: &[TaggedFragment], page: u32) -> Vec<Section> {
    let mut sections = Vec::new();
    let mut current = Section::new(page);
    // Page-scoped: once a title exists on this page, later body text
    // accumulates instead of being promoted, even across section breaks.
    let mut title_set = false;

    for fragment in fragments {
        match fragment.tag {
            Some(Tag::Heading(_)) => {
                if !current.is_blank() {
                    sections.push(std::mem::replace(&mut current, Section::new(page)));
                }
                current.title = fragment.text.clone();
                title_set = true;
            }
            Some(Tag::Body) => {
                if title_set {
                    current.text.push_str(&fragment.text);
                    current.text.push(' ');
                } else {
                    current.title = fragment.text.clone();
                    title_set = true;
                }
            }
            None => {}
        }
    }

    if !current.is_blank() {
        sections.push(current);
    }

    sections
}
