//! Cross-cutting error types for the garden tracker.
//!
//! Field-level validation is reported as a list of [`FieldViolation`]s so a
//! caller sees every broken constraint of a write at once. Storage errors
//! (`DatabaseError`) live in `garden-db`; the CLI converges everything into
//! `anyhow`.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::enums::EntityKind;

/// What went wrong with a single field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViolationKind {
    /// Required field missing, empty, or whitespace only.
    Required,
    /// Text longer than the column allows (lengths in chars).
    TooLong { max: usize, actual: usize },
    /// Value already used by another record of the same kind.
    Duplicate { value: String },
    /// Number is NaN or infinite and cannot be stored.
    NotFinite,
}

/// A single violated field constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FieldViolation {
    pub entity: EntityKind,
    pub field: String,
    #[serde(flatten)]
    pub kind: ViolationKind,
}

impl FieldViolation {
    #[must_use]
    pub fn new(entity: EntityKind, field: impl Into<String>, kind: ViolationKind) -> Self {
        Self {
            entity,
            field: field.into(),
            kind,
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}: ", self.entity, self.field)?;
        match &self.kind {
            ViolationKind::Required => f.write_str("is required"),
            ViolationKind::TooLong { max, actual } => {
                write!(f, "is {actual} characters long (max {max})")
            }
            ViolationKind::Duplicate { value } => write!(f, "'{value}' is already taken"),
            ViolationKind::NotFinite => f.write_str("must be a finite number"),
        }
    }
}

/// Every violated constraint of one write.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ValidationErrors(pub Vec<FieldViolation>);

impl ValidationErrors {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, violation: FieldViolation) {
        self.0.push(violation);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn violations(&self) -> &[FieldViolation] {
        &self.0
    }

    /// Whether `field` has at least one violation.
    #[must_use]
    pub fn has(&self, field: &str) -> bool {
        self.0.iter().any(|v| v.field == field)
    }

    /// `Ok(())` if nothing was recorded, otherwise `Err(self)`.
    ///
    /// # Errors
    ///
    /// Returns the collected violations when at least one was recorded.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, violation) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{violation}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Errors that can be raised by any garden crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// One or more field constraints were violated.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErrors),

    /// A write would break a relation (e.g. a reference to a missing record).
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_lists_every_violation() {
        let mut errors = ValidationErrors::new();
        errors.push(FieldViolation::new(
            EntityKind::Location,
            "name",
            ViolationKind::Required,
        ));
        errors.push(FieldViolation::new(
            EntityKind::Seed,
            "description",
            ViolationKind::TooLong {
                max: 256,
                actual: 300,
            },
        ));
        assert_eq!(
            errors.to_string(),
            "location.name: is required; seed.description: is 300 characters long (max 256)"
        );
    }

    #[test]
    fn into_result_empty_is_ok() {
        assert!(ValidationErrors::new().into_result().is_ok());
    }

    #[test]
    fn violation_serializes_flat() {
        let v = FieldViolation::new(
            EntityKind::Pot,
            "name",
            ViolationKind::Duplicate {
                value: "Big blue".into(),
            },
        );
        let json = serde_json::to_value(&v).unwrap();
        assert_eq!(json["entity"], "pot");
        assert_eq!(json["field"], "name");
        assert_eq!(json["kind"], "duplicate");
        assert_eq!(json["value"], "Big blue");
    }
}
