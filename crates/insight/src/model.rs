//! Business record model and declared value ranges.
//!
//! A [`BusinessRecord`] is the synthesized analytics result for one
//! business. Every numeric field is drawn fresh on each synthesis and
//! must fall inside its declared range; only the headline is mutable
//! after creation (via regeneration).

use std::ops::Range;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Inclusive lower bound for the star rating.
pub const RATING_MIN: f64 = 3.5;
/// Inclusive upper bound for the star rating.
pub const RATING_MAX: f64 = 5.0;

/// Half-open range for the review count.
pub const REVIEW_COUNT_RANGE: Range<u32> = 50..500;

/// Half-open range for the SEO score.
pub const SEO_SCORE_RANGE: Range<u8> = 65..100;
/// Half-open range for the visibility score.
pub const VISIBILITY_RANGE: Range<u8> = 40..100;
/// Half-open range for the engagement score.
pub const ENGAGEMENT_RANGE: Range<u8> = 55..100;
/// Half-open range for the conversion score.
pub const CONVERSION_RANGE: Range<u8> = 30..100;

/// Validated intake data: a trimmed, non-empty business name and location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessProfile {
    pub name: String,
    pub location: String,
}

impl BusinessProfile {
    /// Creates a profile from already-trimmed values.
    ///
    /// Callers normally obtain a profile through
    /// [`validate`](crate::validate::validate), which trims and checks
    /// the raw inputs first.
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
        }
    }
}

/// The four bounded insight percentages.
///
/// Purely illustrative values with no real-world computation behind
/// them; each is drawn independently from its declared range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsightScores {
    pub seo_score: u8,
    pub visibility: u8,
    pub engagement: u8,
    pub conversion: u8,
}

impl InsightScores {
    /// Checks every score against its declared range.
    pub fn in_bounds(&self) -> bool {
        SEO_SCORE_RANGE.contains(&self.seo_score)
            && VISIBILITY_RANGE.contains(&self.visibility)
            && ENGAGEMENT_RANGE.contains(&self.engagement)
            && CONVERSION_RANGE.contains(&self.conversion)
    }
}

/// Synthesized analytics for one business.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessRecord {
    /// Trimmed business name from intake.
    pub name: String,
    /// Trimmed business location from intake.
    pub location: String,
    /// Star rating in [3.5, 5.0] with one fractional digit.
    pub rating: f64,
    /// Review count in [50, 500).
    pub review_count: u32,
    /// One of the ten template expansions of name/location.
    ///
    /// The only field that may change after creation.
    pub headline: String,
    /// The four bounded insight percentages.
    pub insights: InsightScores,
    /// When this record was synthesized.
    pub generated_at: DateTime<Utc>,
}

impl BusinessRecord {
    /// Checks every declared numeric bound in one place.
    ///
    /// Used by tests and debug assertions; a freshly synthesized
    /// record always satisfies it.
    pub fn bounds_ok(&self) -> bool {
        let tenths = self.rating * 10.0;
        let on_tenths_grid = (tenths - tenths.round()).abs() < 1e-9;

        (RATING_MIN..=RATING_MAX).contains(&self.rating)
            && on_tenths_grid
            && REVIEW_COUNT_RANGE.contains(&self.review_count)
            && self.insights.in_bounds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> BusinessRecord {
        BusinessRecord {
            name: "Cake & Co".to_string(),
            location: "Mumbai".to_string(),
            rating: 4.2,
            review_count: 128,
            headline: "Discover Why Mumbai Loves Cake & Co".to_string(),
            insights: InsightScores {
                seo_score: 80,
                visibility: 60,
                engagement: 70,
                conversion: 50,
            },
            generated_at: Utc::now(),
        }
    }

    #[test]
    fn test_scores_in_bounds() {
        let scores = InsightScores {
            seo_score: 65,
            visibility: 40,
            engagement: 55,
            conversion: 30,
        };
        assert!(scores.in_bounds());
    }

    #[test]
    fn test_scores_out_of_bounds() {
        let low_seo = InsightScores {
            seo_score: 64,
            visibility: 40,
            engagement: 55,
            conversion: 30,
        };
        assert!(!low_seo.in_bounds());

        let full_marks = InsightScores {
            seo_score: 100,
            visibility: 40,
            engagement: 55,
            conversion: 30,
        };
        assert!(!full_marks.in_bounds());
    }

    #[test]
    fn test_record_bounds_ok() {
        assert!(sample_record().bounds_ok());
    }

    #[test]
    fn test_record_rating_bounds() {
        let mut record = sample_record();
        record.rating = 3.4;
        assert!(!record.bounds_ok());

        record.rating = 5.1;
        assert!(!record.bounds_ok());

        record.rating = 3.5;
        assert!(record.bounds_ok());

        record.rating = 5.0;
        assert!(record.bounds_ok());
    }

    #[test]
    fn test_record_rating_fractional_digits() {
        let mut record = sample_record();
        record.rating = 4.25;
        assert!(!record.bounds_ok());
    }

    #[test]
    fn test_record_review_count_bounds() {
        let mut record = sample_record();
        record.review_count = 49;
        assert!(!record.bounds_ok());

        record.review_count = 500;
        assert!(!record.bounds_ok());

        record.review_count = 499;
        assert!(record.bounds_ok());
    }
}
