//! Intake validation.
//!
//! Two free-text fields, trimmed before checking; each may fail
//! independently with a `required` reason. Validation never panics and
//! never throws - the error value carries per-field reasons so the
//! caller can surface them inline and clear one field's error the
//! moment that field is edited.

use serde::{Deserialize, Serialize};

use crate::model::BusinessProfile;

/// Selector for one of the two intake fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Field {
    Name,
    Location,
}

/// Why a field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldReason {
    /// The field was empty or whitespace-only.
    Required,
}

impl std::fmt::Display for FieldReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Required => write!(f, "required"),
        }
    }
}

/// Per-field validation errors; both fields may fail simultaneously.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldErrors {
    pub name: Option<FieldReason>,
    pub location: Option<FieldReason>,
}

impl FieldErrors {
    /// True when neither field carries an error.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.location.is_none()
    }

    /// Returns the error attached to one field, if any.
    pub fn get(&self, field: Field) -> Option<FieldReason> {
        match field {
            Field::Name => self.name,
            Field::Location => self.location,
        }
    }

    /// Drops the error attached to one field.
    ///
    /// The caller invokes this when the user edits that field, so the
    /// inline message disappears on edit rather than on resubmit.
    pub fn clear(&mut self, field: Field) {
        match field {
            Field::Name => self.name = None,
            Field::Location => self.location = None,
        }
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut parts = Vec::new();
        if let Some(reason) = self.name {
            parts.push(format!("name: {reason}"));
        }
        if let Some(reason) = self.location {
            parts.push(format!("location: {reason}"));
        }
        write!(f, "{}", parts.join(", "))
    }
}

/// Validates the two intake fields.
///
/// Trims both inputs before checking. On success returns the trimmed
/// values as a [`BusinessProfile`]; on failure returns per-field
/// `required` reasons, independently for each empty field.
///
/// # Errors
/// Returns [`FieldErrors`] when either field is empty or
/// whitespace-only after trimming.
pub fn validate(name: &str, location: &str) -> Result<BusinessProfile, FieldErrors> {
    let name = name.trim();
    let location = location.trim();

    let errors = FieldErrors {
        name: name.is_empty().then_some(FieldReason::Required),
        location: location.is_empty().then_some(FieldReason::Required),
    };

    if errors.is_empty() {
        Ok(BusinessProfile::new(name, location))
    } else {
        Err(errors)
    }
}
