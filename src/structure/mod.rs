//! Document structuring pipeline.
//!
//! Pages pass through three per-page phases: a style catalog counts
//! span style occurrences, a tag map ranks styles into body text and
//! heading levels, and the segmenter folds consecutive same-style
//! spans into tagged fragments. Page analysis carries no state across
//! pages, so pages are independent and can run in parallel. Fragments
//! then fold into sections page by page, and a repair pass cleans the
//! combined list.

pub mod catalog;
pub mod options;
pub mod repair;
pub mod sections;
pub mod segment;
pub mod tags;

pub use catalog::{CatalogEntry, SpanStyle, StyleCatalog, StyleId};
pub use options::{Granularity, StructureOptions};
pub use repair::repair;
pub use sections::structure_fragments;
pub use segment::{segment_block, segment_page, TaggedFragment};
pub use tags::{Tag, TagMap};

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::{Page, Section};

/// One page's tagged fragments, in reading order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageFragments {
    /// Zero-based page index
    pub page: u32,

    /// Fragments in the order they appear on the page
    pub fragments: Vec<TaggedFragment>,
}

/// Analyze every page into tagged fragments.
///
/// Output order matches input order regardless of the parallel
/// setting. Any page failing analysis fails the whole call; no
/// partial output is returned.
pub fn extract_fragments(pages: &[Page], options: &StructureOptions) -> Result<Vec<PageFragments>> {
    if options.parallel {
        pages.par_iter().map(analyze_page).collect()
    } else {
        pages.iter().map(analyze_page).collect()
    }
}

fn analyze_page(page: &Page) -> Result<PageFragments> {
    let catalog = StyleCatalog::build(page, Granularity::Granular)?;
    let tags = TagMap::assign(&catalog);
    let fragments = segment_page(page, &tags);
    log::debug!(
        "page {}: {} styles, {} fragments",
        page.index,
        catalog.len(),
        fragments.len()
    );
    Ok(PageFragments {
        page: page.index,
        fragments,
    })
}

/// Fold analyzed pages into a repaired section list.
pub fn fold_sections(analyzed: &[PageFragments]) -> Vec<Section> {
    let mut sections = Vec::new();
    for page in analyzed {
        sections.extend(structure_fragments(&page.fragments, page.page));
    }
    repair(sections)
}

/// Run the full pipeline: analyze pages, fold, repair.
pub fn structure_document(pages: &[Page], options: &StructureOptions) -> Result<Vec<Section>> {
    let analyzed = extract_fragments(pages, options)?;
    Ok(fold_sections(&analyzed))
}
