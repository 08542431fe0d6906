//! Structure repair for folded sections.
//!
//! Page folding is local, so the combined section list can carry
//! artifacts: adjacent text-less sections where a heading and its
//! subtitle were split, exact duplicates from repeated headers, and
//! dangling titles whose body landed in the next section. The repair
//! pass runs three stages in a fixed order, each a pure list-to-list
//! transform:
//!
//! 1. merge adjacent empty pairs
//! 2. remove exact duplicates
//! 3. concatenate dangling titles forward

use std::collections::HashSet;

use crate::model::Section;

/// Run all repair stages over a section list.
pub fn repair(sections: Vec<Section>) -> Vec<Section> {
    let before = sections.len();
    let sections = merge_empty_pairs(sections);
    let sections = remove_duplicates(sections);
    let sections = concat_dangling_titles(sections);
    log::debug!("repair: {} sections in, {} out", before, sections.len());
    sections
}

/// Merge each adjacent pair of text-less sections into one section
/// whose text is the second title.
///
/// The merged section keeps the first section's page. Three empty
/// sections in a row merge the first two and leave the third alone.
pub fn merge_empty_pairs(sections: Vec<Section>) -> Vec<Section> {
    let mut merged = Vec::with_capacity(sections.len());
    let mut iter = sections.into_iter().peekable();

    while let Some(section) = iter.next() {
        let pair = section.text.is_empty()
            && iter.peek().map(|next| next.text.is_empty()).unwrap_or(false);
        if pair {
            if let Some(next) = iter.next() {
                merged.push(Section::from_parts(section.title, next.title, section.page));
            }
        } else {
            merged.push(section);
        }
    }

    merged
}

/// Drop sections identical to an earlier one, keeping first occurrences.
pub fn remove_duplicates(sections: Vec<Section>) -> Vec<Section> {
    let mut seen = HashSet::new();
    sections
        .into_iter()
        .filter(|section| seen.insert(section.clone()))
        .collect()
}

/// Fold text-less titles forward into the next section's title.
///
/// A run of dangling titles accumulates into a single prefix, joined
/// with spaces. The final section is never folded away even when its
/// text is empty.
pub fn concat_dangling_titles(sections: Vec<Section>) -> Vec<Section> {
    let total = sections.len();
    let mut folded = Vec::with_capacity(total);
    let mut pending: Option<String> = None;

    for (index, mut section) in sections.into_iter().enumerate() {
        if let Some(prefix) = pending.take() {
            section.title = format!("{} {}", prefix, section.title);
        }
        if section.text.is_empty() && index + 1 < total {
            pending = Some(section.title);
        } else {
            folded.push(section);
        }
    }

    folded
}
