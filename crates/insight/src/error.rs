//! Error types for the insight crate.

use thiserror::Error;

/// Insight-related errors.
///
/// Synthesis itself cannot fail; the only failure the pure core can
/// produce is addressing a headline template that does not exist.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InsightError {
    #[error("headline template index {index} is out of range")]
    TemplateOutOfRange { index: usize },
}

impl InsightError {
    /// Create a template out-of-range error.
    pub fn template_out_of_range(index: usize) -> Self {
        Self::TemplateOutOfRange { index }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = InsightError::template_out_of_range(12);
        assert!(err.to_string().contains("12"));
        assert!(err.to_string().contains("out of range"));
    }
}
