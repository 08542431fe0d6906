//! Integration tests for metadata stamping and JSON output.

use spanfold::{enrich_sections, to_json, JsonFormat, Section, SectionRecord};

fn sections(titles: &[&str]) -> Vec<Section> {
    titles
        .iter()
        .enumerate()
        .map(|(i, title)| Section::from_parts(*title, format!("text {} ", i), i as u32))
        .collect()
}

#[test]
fn test_metadata_identical_across_records() {
    let records = enrich_sections(
        sections(&["Intro", "Setup", "Usage", "FAQ", "Appendix"]),
        "guides/user-manual.pdf",
        "https://docs.example.com/",
    );

    assert_eq!(records.len(), 5);
    for record in &records {
        assert_eq!(record.file, "user-manual.pdf");
        assert_eq!(record.product, "Intro");
        assert_eq!(record.document, "Intro");
        assert_eq!(record.link, "https://docs.example.com/user-manual.pdf");
    }
}

#[test]
fn test_section_content_preserved() {
    let records = enrich_sections(sections(&["A", "B"]), "x.pdf", "");

    assert_eq!(records[0].title, "A");
    assert_eq!(records[0].text, "text 0 ");
    assert_eq!(records[0].page, 0);
    assert_eq!(records[1].title, "B");
    assert_eq!(records[1].page, 1);
}

#[test]
fn test_file_name_variants() {
    let cases = [
        ("manual.pdf", "manual.pdf"),
        ("docs/manual.pdf", "manual.pdf"),
        ("/abs/path/to/manual.pdf", "manual.pdf"),
        ("./relative/manual.pdf", "manual.pdf"),
    ];
    for (path, expected) in cases {
        let records = enrich_sections(sections(&["T"]), path, "https://h/");
        assert_eq!(records[0].file, expected, "path {:?}", path);
        assert_eq!(records[0].link, format!("https://h/{}", expected));
    }
}

#[test]
fn test_empty_input_yields_empty_output() {
    let records = enrich_sections(Vec::new(), "manual.pdf", "https://h/");
    assert!(records.is_empty());
}

#[test]
fn test_pretty_json_keeps_non_ascii() {
    let records = enrich_sections(
        vec![Section::from_parts("한글 제목", "본문 텍스트 ", 0)],
        "korean.pdf",
        "https://docs.example.com/",
    );
    let json = to_json(&records, JsonFormat::Pretty).unwrap();

    assert!(json.contains("한글 제목"));
    assert!(json.contains("본문 텍스트"));
    assert!(!json.contains("\\u"));
}

#[test]
fn test_compact_json_roundtrip() {
    let records = enrich_sections(sections(&["One", "Two"]), "r.pdf", "https://h/");
    let json = to_json(&records, JsonFormat::Compact).unwrap();
    let parsed: Vec<SectionRecord> = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed, records);
}

#[test]
fn test_record_field_order() {
    let records = enrich_sections(sections(&["T"]), "f.pdf", "https://h/");
    let json = to_json(&records, JsonFormat::Compact).unwrap();

    let title_at = json.find("\"title\"").unwrap();
    let text_at = json.find("\"text\"").unwrap();
    let page_at = json.find("\"page\"").unwrap();
    let file_at = json.find("\"file\"").unwrap();
    let link_at = json.find("\"link\"").unwrap();
    assert!(title_at < text_at && text_at < page_at && page_at < file_at && file_at < link_at);
}
