//! The SEO headline template set.
//!
//! Ten fixed templates, each a pure string function of the business
//! name and location. The order is fixed so tests can address
//! templates by index; selection weight is uniform.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::InsightError;

/// Number of headline templates.
pub const HEADLINE_TEMPLATE_COUNT: usize = 10;

/// A validated index into the headline template set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateIndex(usize);

impl TemplateIndex {
    /// Creates a template index.
    ///
    /// # Errors
    /// Returns an error if `index` is past the last template.
    pub fn new(index: usize) -> Result<Self, InsightError> {
        if index < HEADLINE_TEMPLATE_COUNT {
            Ok(Self(index))
        } else {
            Err(InsightError::template_out_of_range(index))
        }
    }

    /// Draws a uniformly random template index.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self(rng.gen_range(0..HEADLINE_TEMPLATE_COUNT))
    }

    /// Returns the underlying index.
    pub fn as_usize(&self) -> usize {
        self.0
    }
}

/// Expands one template with the given name and location.
pub fn render(index: TemplateIndex, name: &str, location: &str) -> String {
    match index.0 {
        0 => format!("Why {name} is {location}'s Best-Kept Secret in 2025"),
        1 => format!("{name}: Revolutionizing {location}'s Business Landscape"),
        2 => format!("How {name} Became {location}'s Most Trusted Choice"),
        3 => format!("{name} - Leading the Way in {location}'s Market"),
        4 => format!("Discover Why {location} Loves {name}"),
        5 => format!("{name}: Your Premier Destination in {location}"),
        6 => format!("The {name} Difference: Transforming {location}"),
        7 => format!("{name} - Where {location} Finds Excellence"),
        8 => format!("Unlocking Success: {name}'s Impact on {location}"),
        // TemplateIndex construction guarantees 0..HEADLINE_TEMPLATE_COUNT.
        _ => format!("{name}: Building Tomorrow's {location} Today"),
    }
}

/// Expands one template by raw index.
///
/// # Errors
/// Returns an error if `index` is past the last template.
pub fn render_headline(index: usize, name: &str, location: &str) -> Result<String, InsightError> {
    Ok(render(TemplateIndex::new(index)?, name, location))
}

/// The full expansion of every template, in template order.
pub fn all_headlines(name: &str, location: &str) -> Vec<String> {
    (0..HEADLINE_TEMPLATE_COUNT)
        .map(|i| render(TemplateIndex(i), name, location))
        .collect()
}
