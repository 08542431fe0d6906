//! # spanfold
//!
//! Style-driven document structuring library for Rust.
//!
//! This library folds styled text spans into titled sections: per
//! page, span styles are counted, the dominant style becomes body
//! text, the remaining styles become ranked headings, and consecutive
//! same-style spans fold into sections. A repair pass cleans the
//! combined list, and sections can be stamped with source metadata
//! and rendered as JSON.
//!
//! ## Quick Start
//!
//! ```
//! use spanfold::{structure_document, Page, PageBlock, TextLine, TextSpan};
//!
//! let page = Page::with_blocks(0, vec![PageBlock::text(vec![
//!     TextLine::new(vec![TextSpan::new("Getting Started", 18.0, "Helvetica-Bold", 0)]),
//!     TextLine::new(vec![
//!         TextSpan::new("Install the tool.", 11.0, "Helvetica", 0),
//!         TextSpan::new("Run it once.", 11.0, "Helvetica", 0),
//!     ]),
//! ])]);
//!
//! let sections = structure_document(&[page])?;
//! assert_eq!(sections.len(), 1);
//! assert_eq!(sections[0].title, "Getting Started");
//! assert_eq!(sections[0].text, "Install the tool. Run it once. ");
//! # Ok::<(), spanfold::Error>(())
//! ```
//!
//! ## Features
//!
//! - **Style-driven structure**: headings ranked from span styles, per page
//! - **Section folding**: titles from headings, first paragraph promoted when a page has none
//! - **Repair pass**: merges split headings, drops duplicates, rejoins dangling titles
//! - **Metadata stamping**: file, product, document and link fields on every record
//! - **Parallel processing**: optional Rayon-based page analysis

pub mod enrich;
pub mod error;
pub mod model;
pub mod render;
pub mod structure;

// Re-export commonly used types
pub use enrich::enrich_sections;
pub use error::{Error, Result};
pub use model::{Page, PageBlock, Section, SectionRecord, TextLine, TextSpan};
pub use render::{to_json, JsonFormat};
pub use structure::{
    extract_fragments, fold_sections, Granularity, PageFragments, StructureOptions, Tag, TagMap,
    TaggedFragment,
};

/// Structure a document's pages into repaired sections.
///
/// # Arguments
///
/// * `pages` - Pages with their text spans, in document order
///
/// # Example
///
/// ```
/// use spanfold::{structure_document, Page};
///
/// let pages: Vec<Page> = Vec::new();
/// let sections = structure_document(&pages)?;
/// assert!(sections.is_empty());
/// # Ok::<(), spanfold::Error>(())
/// ```
pub fn structure_document(pages: &[Page]) -> Result<Vec<Section>> {
    structure::structure_document(pages, &StructureOptions::default())
}

/// Structure a document's pages with custom options.
///
/// # Example
///
/// ```
/// use spanfold::{structure_document_with_options, Page, StructureOptions};
///
/// let pages: Vec<Page> = Vec::new();
/// let options = StructureOptions::new().parallel();
/// let sections = structure_document_with_options(&pages, &options)?;
/// assert!(sections.is_empty());
/// # Ok::<(), spanfold::Error>(())
/// ```
pub fn structure_document_with_options(
    pages: &[Page],
    options: &StructureOptions,
) -> Result<Vec<Section>> {
    structure::structure_document(pages, options)
}

/// Structure pages, stamp metadata, and render pretty JSON in one call.
///
/// # Arguments
///
/// * `pages` - Pages with their text spans, in document order
/// * `file_path` - Source file path; only the base name is kept
/// * `base_url` - Prefix the file name is appended to for the link field
pub fn convert_document(pages: &[Page], file_path: &str, base_url: &str) -> Result<String> {
    let sections = structure_document(pages)?;
    let records = enrich_sections(sections, file_path, base_url);
    to_json(&records, JsonFormat::Pretty)
}

/// Builder for structuring documents.
///
/// # Example
///
/// ```
/// use spanfold::{Spanfold, Page, PageBlock, TextLine, TextSpan};
///
/// let page = Page::with_blocks(0, vec![PageBlock::text(vec![
///     TextLine::new(vec![TextSpan::new("Release Notes", 16.0, "Inter-Bold", 0)]),
///     TextLine::new(vec![
///         TextSpan::new("Fixed a crash.", 10.5, "Inter", 0),
///         TextSpan::new("Faster startup.", 10.5, "Inter", 0),
///     ]),
/// ])]);
///
/// let json = Spanfold::new()
///     .sequential()
///     .structure(&[page])?
///     .to_enriched_json("notes.pdf", "https://docs.example.com/")?;
/// assert!(json.contains("\"file\": \"notes.pdf\""));
/// # Ok::<(), spanfold::Error>(())
/// ```
pub struct Spanfold {
    options: StructureOptions,
    format: JsonFormat,
}

impl Spanfold {
    /// Create a new Spanfold builder.
    pub fn new() -> Self {
        Self {
            options: StructureOptions::default(),
            format: JsonFormat::default(),
        }
    }

    /// Analyze pages in parallel.
    pub fn parallel(mut self) -> Self {
        self.options = self.options.parallel();
        self
    }

    /// Analyze pages sequentially.
    pub fn sequential(mut self) -> Self {
        self.options = self.options.sequential();
        self
    }

    /// Set the JSON output format.
    pub fn with_format(mut self, format: JsonFormat) -> Self {
        self.format = format;
        self
    }

    /// Render compact JSON.
    pub fn compact(mut self) -> Self {
        self.format = JsonFormat::Compact;
        self
    }

    /// Structure pages and return a result wrapper.
    pub fn structure(self, pages: &[Page]) -> Result<StructuredDocument> {
        let sections = structure::structure_document(pages, &self.options)?;
        Ok(StructuredDocument {
            sections,
            format: self.format,
        })
    }
}

impl Default for Spanfold {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of structuring a document.
pub struct StructuredDocument {
    /// The repaired sections
    pub sections: Vec<Section>,
    format: JsonFormat,
}

impl StructuredDocument {
    /// Get the sections.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Consume the wrapper and take the sections.
    pub fn into_sections(self) -> Vec<Section> {
        self.sections
    }

    /// Render the sections as JSON, without metadata.
    pub fn to_json(&self) -> Result<String> {
        to_json(&self.sections, self.format)
    }

    /// Stamp metadata and render the records as JSON.
    pub fn to_enriched_json(&self, file_path: &str, base_url: &str) -> Result<String> {
        let records = enrich_sections(self.sections.clone(), file_path, base_url);
        to_json(&records, self.format)
    }
}
