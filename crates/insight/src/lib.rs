#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

//! Bizpulse Insight - synthetic business analytics core.
//!
//! Pure, synchronous logic for the dashboard: intake validation,
//! the business record model with its declared value ranges, the
//! headline template set, and a seedable insight synthesizer.
//!
//! # Modules
//!
//! - [`model`] - Record types and declared value ranges
//! - [`validate`] - Intake validation with per-field errors
//! - [`headline`] - The ten-template SEO headline set
//! - [`synth`] - Seedable random synthesis of records

pub mod error;
pub mod headline;
pub mod model;
pub mod synth;
pub mod validate;

pub use error::InsightError;
pub use headline::{all_headlines, render_headline, TemplateIndex, HEADLINE_TEMPLATE_COUNT};
pub use model::{BusinessProfile, BusinessRecord, InsightScores};
pub use synth::{DefaultSynthesizer, Synthesizer};
pub use validate::{validate, Field, FieldErrors, FieldReason};
