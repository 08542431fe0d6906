//! Data model for spanfold.
//!
//! This module defines the input contract (pages of styled text spans,
//! as handed over by a text-extraction layer) and the output records
//! (titled sections, with and without stamped document metadata).

mod section;
mod source;

pub use section::{Section, SectionRecord};
pub use source::{Page, PageBlock, TextLine, TextSpan};
