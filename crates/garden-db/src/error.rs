//! Database error types for garden-db.

use garden_core::enums::EntityKind;
use garden_core::errors::{CoreError, FieldViolation, ValidationErrors, ViolationKind};
use thiserror::Error;

/// Errors from database operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// One or more field constraints were violated; nothing was written.
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    /// The referenced record does not exist.
    #[error("{entity} not found: {id}")]
    NotFound { entity: EntityKind, id: String },

    /// A write would leave a reference pointing at a missing record.
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    /// A stored value could not be decoded.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema migration or verification failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),
}

impl DatabaseError {
    /// Translate a libSQL error raised by a write to `entity`.
    ///
    /// `attempted` holds the `(column, value)` pairs of unique columns being
    /// written so a `UNIQUE` failure can report the offending value.
    #[must_use]
    pub fn from_write(entity: EntityKind, attempted: &[(&str, &str)], err: libsql::Error) -> Self {
        let msg = err.to_string();
        if let Some((_, rest)) = msg.split_once("UNIQUE constraint failed: ") {
            let column = rest
                .split_once('.')
                .map_or(rest, |(_, col)| col)
                .split(|c: char| !(c.is_alphanumeric() || c == '_'))
                .next()
                .unwrap_or_default();
            let value = attempted
                .iter()
                .find(|(col, _)| *col == column)
                .map(|(_, v)| (*v).to_string())
                .unwrap_or_default();
            return Self::Validation(ValidationErrors(vec![FieldViolation::new(
                entity,
                column,
                ViolationKind::Duplicate { value },
            )]));
        }
        if msg.contains("FOREIGN KEY constraint failed") {
            return Self::ConstraintViolation(format!(
                "{entity} write references a record that does not exist"
            ));
        }
        Self::LibSql(err)
    }
}

/// Collapse storage errors into the crate-independent taxonomy.
impl From<DatabaseError> for CoreError {
    fn from(err: DatabaseError) -> Self {
        match err {
            DatabaseError::Validation(errors) => Self::Validation(errors),
            DatabaseError::NotFound { entity, id } => Self::NotFound {
                entity_type: entity.to_string(),
                id,
            },
            DatabaseError::ConstraintViolation(msg) => Self::ConstraintViolation(msg),
            other => Self::Other(anyhow::Error::new(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_keeps_entity_name() {
        let err = DatabaseError::NotFound {
            entity: EntityKind::Pot,
            id: "pot-00000000".into(),
        };
        match CoreError::from(err) {
            CoreError::NotFound { entity_type, id } => {
                assert_eq!(entity_type, "pot");
                assert_eq!(id, "pot-00000000");
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn storage_failures_become_other() {
        let core = CoreError::from(DatabaseError::Migration("boom".into()));
        assert!(matches!(core, CoreError::Other(_)));
        assert!(core.to_string().contains("boom"));
    }
}
