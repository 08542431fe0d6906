//! Error types for the spanfold library.

use thiserror::Error;

/// Result type alias for spanfold operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during structure inference.
#[derive(Error, Debug)]
pub enum Error {
    /// A page contributed no text-bearing spans, so no style catalog can be
    /// built for it. Fails the whole document run.
    #[error("no text spans found on page {0}")]
    EmptyPage(u32),

    /// A span carried style data the classifier cannot use.
    #[error("malformed span on page {page}: {reason}")]
    MalformedSpan {
        /// Zero-based index of the page the span came from
        page: u32,
        /// What was unusable about the span
        reason: String,
    },

    /// Section records could not be serialized to JSON.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::EmptyPage(3);
        assert_eq!(err.to_string(), "no text spans found on page 3");

        let err = Error::MalformedSpan {
            page: 0,
            reason: "non-finite font size".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "malformed span on page 0: non-finite font size"
        );
    }

    #[test]
    fn test_serde_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Serialize(_)));
        assert!(err.to_string().starts_with("serialization error"));
    }
}
