//! Per-page style catalogs.
//!
//! A catalog counts how often each distinct span style occurs on one
//! page and records the attributes behind each identifier. The most
//! frequent style is the page's body text; everything rarer is a
//! heading candidate for the tag assigner. Catalogs are built fresh
//! per page and never shared.

use indexmap::IndexMap;

use crate::error::{Error, Result};
use crate::model::{Page, PageBlock, TextSpan};

use super::options::Granularity;

/// Hashable key for one distinct span style.
///
/// Sizes are keyed by their raw `f32` bit pattern, so spans reported
/// with the identical size always collide and no rounding step exists.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StyleId {
    /// Size-only key (coarse catalogs)
    Coarse {
        /// Bit pattern of the font size
        size_bits: u32,
    },

    /// Full (size, font, color) key
    Granular {
        /// Bit pattern of the font size
        size_bits: u32,
        /// Font family name
        font: String,
        /// Packed sRGB text color
        color: u32,
    },
}

impl StyleId {
    /// Derive the identifier for a span at the given granularity.
    pub fn of(span: &TextSpan, granularity: Granularity) -> Self {
        match granularity {
            Granularity::Coarse => StyleId::Coarse {
                size_bits: span.size.to_bits(),
            },
            Granularity::Granular => Self::from_attrs(span.size, &span.font, span.color),
        }
    }

    /// Derive the full-precision identifier for a span, regardless of
    /// catalog mode.
    pub fn granular(span: &TextSpan) -> Self {
        Self::from_attrs(span.size, &span.font, span.color)
    }

    fn from_attrs(size: f32, font: &str, color: u32) -> Self {
        StyleId::Granular {
            size_bits: size.to_bits(),
            font: font.to_string(),
            color,
        }
    }
}

/// The recorded style attributes behind one identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct SpanStyle {
    /// Font size in points
    pub size: f32,

    /// Font family name
    pub font: String,

    /// Packed sRGB text color
    pub color: u32,
}

impl SpanStyle {
    /// Capture the style attributes of a span.
    pub fn of(span: &TextSpan) -> Self {
        Self {
            size: span.size,
            font: span.font.clone(),
            color: span.color,
        }
    }

    /// The full-precision identifier for these attributes.
    pub fn id(&self) -> StyleId {
        StyleId::from_attrs(self.size, &self.font, self.color)
    }
}

/// One catalog row: recorded style attributes plus occurrence count.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    /// Style attributes recorded for this identifier
    pub style: SpanStyle,

    /// Number of spans observed with this identifier
    pub count: usize,
}

/// Style occurrence statistics for a single page.
#[derive(Debug, Clone)]
pub struct StyleCatalog {
    page: u32,
    entries: IndexMap<StyleId, CatalogEntry>,
    dominant: SpanStyle,
}

impl StyleCatalog {
    /// Build the catalog for one page by scanning every span in its
    /// text blocks.
    ///
    /// Whitespace-only spans still carry a countable style and are
    /// included in the counts. Returns [`Error::EmptyPage`] when the
    /// page has no spans at all and [`Error::MalformedSpan`] when a
    /// span reports a non-finite font size.
    pub fn build(page: &Page, granularity: Granularity) -> Result<Self> {
        let mut entries: IndexMap<StyleId, CatalogEntry> = IndexMap::new();

        for block in &page.blocks {
            let lines = match block {
                PageBlock::Text { lines } => lines,
                PageBlock::Image => continue,
            };
            for line in lines {
                for span in &line.spans {
                    if !span.size.is_finite() {
                        return Err(Error::MalformedSpan {
                            page: page.index,
                            reason: format!("non-finite font size for font {:?}", span.font),
                        });
                    }
                    entries
                        .entry(StyleId::of(span, granularity))
                        .and_modify(|entry| entry.count += 1)
                        .or_insert_with(|| CatalogEntry {
                            style: SpanStyle::of(span),
                            count: 1,
                        });
                }
            }
        }

        // First-encountered entry wins among equal counts, matching a
        // stable descending sort over insertion order.
        let mut best: Option<&CatalogEntry> = None;
        for entry in entries.values() {
            let replace = match best {
                Some(current) => entry.count > current.count,
                None => true,
            };
            if replace {
                best = Some(entry);
            }
        }

        let dominant = match best {
            Some(entry) => entry.style.clone(),
            None => return Err(Error::EmptyPage(page.index)),
        };

        log::debug!(
            "page {}: {} spans in {} distinct styles, dominant {:?} at {:.1}pt",
            page.index,
            entries.values().map(|entry| entry.count).sum::<usize>(),
            entries.len(),
            dominant.font,
            dominant.size
        );

        Ok(Self {
            page: page.index,
            entries,
            dominant,
        })
    }

    /// The page this catalog describes.
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Number of distinct style identifiers observed.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Attributes of the page's most frequent style.
    pub fn dominant(&self) -> &SpanStyle {
        &self.dominant
    }

    /// Look up the entry for an identifier.
    pub fn get(&self, id: &StyleId) -> Option<&CatalogEntry> {
        self.entries.get(id)
    }

    /// Iterate entries in first-encounter order.
    pub fn entries(&self) -> impl Iterator<Item = (&StyleId, &CatalogEntry)> {
        self.entries.iter()
    }

    /// Entries sorted by descending occurrence count.
    ///
    /// The sort is stable: identifiers with equal counts keep their
    /// first-encounter order.
    pub fn ranked(&self) -> Vec<(&StyleId, &CatalogEntry)> {
        let mut ranked: Vec<_> = self.entries.iter().collect();
        ranked.sort_by(|a, b| b.1.count.cmp(&a.1.count));
        ranked
    }
}
