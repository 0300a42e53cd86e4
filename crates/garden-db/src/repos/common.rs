//! Checks and SQL assembly shared by every repository.

use chrono::{DateTime, Utc};
use garden_core::enums::EntityKind;
use garden_core::errors::{FieldViolation, ValidationErrors, ViolationKind};
use garden_core::schema::{self, EntitySchema};

use crate::error::DatabaseError;
use crate::service::GardenService;

/// Dynamic `SET` clause for a partial UPDATE.
pub(crate) struct Assignments {
    sets: Vec<String>,
    params: Vec<libsql::Value>,
}

impl Assignments {
    pub(crate) const fn new() -> Self {
        Self {
            sets: Vec::new(),
            params: Vec::new(),
        }
    }

    pub(crate) fn set(&mut self, column: &str, value: libsql::Value) {
        self.params.push(value);
        self.sets.push(format!("{column} = ?{}", self.params.len()));
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Execute `UPDATE <table> SET ..., updated_at = <now> WHERE id = <id>`.
    pub(crate) async fn apply(
        mut self,
        conn: &libsql::Connection,
        schema: &EntitySchema,
        id: &str,
        now: DateTime<Utc>,
    ) -> Result<u64, DatabaseError> {
        self.set("updated_at", now.to_rfc3339().into());
        self.params.push(id.into());
        let sql = format!(
            "UPDATE {} SET {} WHERE id = ?{}",
            schema.table,
            self.sets.join(", "),
            self.params.len()
        );
        conn.execute(&sql, libsql::params_from_iter(self.params))
            .await
            .map_err(|e| DatabaseError::from_write(schema.kind, &[], e))
    }
}

pub(crate) fn not_found(entity: EntityKind, id: &str) -> DatabaseError {
    DatabaseError::NotFound {
        entity,
        id: id.to_string(),
    }
}

/// Whether a row with `id` exists in `table`.
pub(crate) async fn row_exists(
    conn: &libsql::Connection,
    table: &str,
    id: &str,
) -> Result<bool, DatabaseError> {
    let mut rows = conn
        .query(&format!("SELECT 1 FROM {table} WHERE id = ?1"), [id])
        .await?;
    Ok(rows.next().await?.is_some())
}

impl GardenService {
    /// Record a `Duplicate` violation if another record of the schema's kind
    /// already uses `value` for the unique column `field`.
    pub(crate) async fn check_unique(
        &self,
        schema: &EntitySchema,
        field: &str,
        value: &str,
        exclude_id: Option<&str>,
        errors: &mut ValidationErrors,
    ) -> Result<(), DatabaseError> {
        let Some(value) = schema::normalize_optional(Some(value)) else {
            return Ok(());
        };
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT 1 FROM {} WHERE {field} = ?1 AND id != ?2 LIMIT 1",
                    schema.table
                ),
                libsql::params![value, exclude_id.unwrap_or_default()],
            )
            .await?;
        if rows.next().await?.is_some() {
            errors.push(FieldViolation::new(
                schema.kind,
                field,
                ViolationKind::Duplicate {
                    value: value.to_string(),
                },
            ));
        }
        Ok(())
    }

    /// Fail with `ConstraintViolation` unless `owner.field` points at an existing `target`.
    pub(crate) async fn ensure_reference(
        &self,
        owner: EntityKind,
        field: &str,
        target: EntityKind,
        id: &str,
    ) -> Result<(), DatabaseError> {
        if row_exists(self.db().conn(), schema::for_kind(target).table, id).await? {
            Ok(())
        } else {
            Err(DatabaseError::ConstraintViolation(format!(
                "{owner}.{field} references {target} '{id}', which does not exist"
            )))
        }
    }
}
