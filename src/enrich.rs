//! Metadata stamping for structured sections.
//!
//! Turns plain sections into flat records carrying source file
//! metadata: the file's base name, a product name taken from the
//! first section's title, the same value in the document field, and a
//! link formed by appending the file name to a base URL. Every record
//! in one call gets identical metadata.

use std::path::Path;

use crate::model::{Section, SectionRecord};

/// Stamp sections with file, product, document and link metadata.
pub fn enrich_sections(
    sections: Vec<Section>,
    file_path: &str,
    base_url: &str,
) -> Vec<SectionRecord> {
    let file = base_name(file_path);
    let product = sections
        .first()
        .map(|section| section.title.clone())
        .unwrap_or_default();
    let link = format!("{}{}", base_url, file);

    sections
        .into_iter()
        .map(|section| SectionRecord {
            title: section.title,
            text: section.text,
            page: section.page,
            file: file.clone(),
            product: product.clone(),
            document: product.clone(),
            link: link.clone(),
        })
        .collect()
}

/// Final path component, or the whole string when there is none.
fn base_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections(count: usize) -> Vec<Section> {
        (0..count)
            .map(|i| Section::from_parts(format!("Title {}", i), format!("text {}", i), i as u32))
            .collect()
    }

    #[test]
    fn test_all_records_share_metadata() {
        let records = enrich_sections(sections(5), "docs/manual.pdf", "https://example.com/");

        assert_eq!(records.len(), 5);
        for record in &records {
            assert_eq!(record.file, "manual.pdf");
            assert_eq!(record.product, "Title 0");
            assert_eq!(record.document, "Title 0");
            assert_eq!(record.link, "https://example.com/manual.pdf");
        }
    }

    #[test]
    fn test_section_fields_pass_through() {
        let records = enrich_sections(sections(2), "a.pdf", "");

        assert_eq!(records[1].title, "Title 1");
        assert_eq!(records[1].text, "text 1");
        assert_eq!(records[1].page, 1);
    }

    #[test]
    fn test_base_name_strips_directories() {
        assert_eq!(base_name("docs/guides/manual.pdf"), "manual.pdf");
        assert_eq!(base_name("manual.pdf"), "manual.pdf");
        assert_eq!(base_name("/abs/path/report.pdf"), "report.pdf");
    }

    #[test]
    fn test_link_is_plain_concatenation() {
        let records = enrich_sections(sections(1), "report.pdf", "https://host/docs/");
        assert_eq!(records[0].link, "https://host/docs/report.pdf");
    }

    #[test]
    fn test_empty_sections_yield_empty_records() {
        let records = enrich_sections(Vec::new(), "manual.pdf", "https://example.com/");
        assert!(records.is_empty());
    }

    #[test]
    fn test_product_taken_from_first_title() {
        let input = vec![
            Section::from_parts("Product Guide", "intro ", 0),
            Section::from_parts("Install", "steps ", 1),
        ];
        let records = enrich_sections(input, "guide.pdf", "https://example.com/");

        assert_eq!(records[0].product, "Product Guide");
        assert_eq!(records[1].product, "Product Guide");
    }
}
