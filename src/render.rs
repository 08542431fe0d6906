//! JSON output for section records.

use serde::Serialize;

use crate::error::Result;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed with 2-space indentation
    #[default]
    Pretty,
    /// Compact single-line output
    Compact,
}

/// Serialize records to a JSON array string.
///
/// Non-ASCII text is emitted as-is, not escaped.
pub fn to_json<T: Serialize>(records: &[T], format: JsonFormat) -> Result<String> {
    let json = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(records)?,
        JsonFormat::Compact => serde_json::to_string(records)?,
    };
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SectionRecord;

    fn record(title: &str) -> SectionRecord {
        SectionRecord {
            title: title.to_string(),
            text: "body ".to_string(),
            page: 0,
            file: "manual.pdf".to_string(),
            product: title.to_string(),
            document: title.to_string(),
            link: "https://example.com/manual.pdf".to_string(),
        }
    }

    #[test]
    fn test_pretty_output_is_indented() {
        let json = to_json(&[record("Guide")], JsonFormat::Pretty).unwrap();

        assert!(json.contains('\n'));
        assert!(json.contains("  \"title\": \"Guide\""));
    }

    #[test]
    fn test_compact_output_is_single_line() {
        let json = to_json(&[record("Guide")], JsonFormat::Compact).unwrap();

        assert!(!json.contains('\n'));
        assert!(json.starts_with('['));
        assert!(json.ends_with(']'));
    }

    #[test]
    fn test_non_ascii_not_escaped() {
        let json = to_json(&[record("한글 제목")], JsonFormat::Pretty).unwrap();
        assert!(json.contains("한글 제목"));
    }

    #[test]
    fn test_empty_slice_renders_empty_array() {
        let records: Vec<SectionRecord> = Vec::new();
        let json = to_json(&records, JsonFormat::Compact).unwrap();
        assert_eq!(json, "[]");
    }

    #[test]
    fn test_compact_roundtrip() {
        let records = vec![record("A"), record("B")];
        let json = to_json(&records, JsonFormat::Compact).unwrap();
        let parsed: Vec<SectionRecord> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, records);
    }
}
