//! # garden-db
//!
//! libSQL storage for the garden tracker.
//!
//! Handles all relational state: locations, pots, plants, seed lots, and
//! plantings. Entity shapes come from `garden_core::schema`; on open, the
//! embedded migration is applied and every declared column is checked against
//! the live tables. Repository methods live on [`service::GardenService`].

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod service;
pub mod updates;

#[cfg(test)]
mod test_support;

use error::DatabaseError;
use garden_core::schema::EntitySchema;
use libsql::Builder;

/// Central database handle for all garden record operations.
///
/// Wraps a libSQL database and connection. Provides ID generation and schema
/// verification; repository methods are on `GardenService`.
pub struct GardenDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl GardenDb {
    /// Open a local database at the given path (`":memory:"` for tests).
    ///
    /// Runs migrations, then verifies the tables against `garden_core::schema::ALL`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened, migrations
    /// fail, or a declared column is missing.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        Self::open_local_with(path, garden_core::schema::ALL).await
    }

    /// Open a local database and verify it against the given schema declarations.
    ///
    /// # Errors
    ///
    /// See [`GardenDb::open_local`].
    pub async fn open_local_with(
        path: &str,
        schemas: &[EntitySchema],
    ) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        // Enable foreign keys (must be per-connection in SQLite)
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;

        let garden_db = Self { db, conn };
        garden_db.run_migrations().await?;
        garden_db.verify_schema(schemas).await?;
        tracing::debug!(path, tables = schemas.len(), "opened garden database");
        Ok(garden_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Generate a prefixed ID via libSQL. Returns e.g., `"loc-a3f8b2c1"`.
    ///
    /// Uses `randomblob(4)` in SQL to produce 8-char hex, then prepends the prefix.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or returns no rows.
    pub async fn generate_id(&self, prefix: &str) -> Result<String, DatabaseError> {
        let mut rows = self
            .conn
            .query(
                &format!("SELECT '{prefix}-' || lower(hex(randomblob(4)))"),
                (),
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(row.get::<String>(0)?)
    }

    /// Check that every declared table has every declared column.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Migration` naming the first missing table or column.
    pub async fn verify_schema(&self, schemas: &[EntitySchema]) -> Result<(), DatabaseError> {
        for schema in schemas {
            let mut rows = self
                .conn
                .query(&format!("PRAGMA table_info({})", schema.table), ())
                .await?;
            let mut present = Vec::new();
            while let Some(row) = rows.next().await? {
                present.push(row.get::<String>(1)?);
            }
            if present.is_empty() {
                return Err(DatabaseError::Migration(format!(
                    "table '{}' does not exist",
                    schema.table
                )));
            }
            if let Some(missing) = schema.columns().find(|col| !present.iter().any(|p| p == col)) {
                return Err(DatabaseError::Migration(format!(
                    "table '{}' is missing column '{missing}'",
                    schema.table
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use garden_core::enums::EntityKind;
    use garden_core::schema::{EntitySchema, FieldSpec, FieldType};
    use std::collections::HashSet;

    /// Helper to create an in-memory database for testing.
    async fn test_db() -> GardenDb {
        GardenDb::open_local(":memory:").await.unwrap()
    }

    #[tokio::test]
    async fn open_local_creates_schema() {
        let db = test_db().await;

        for schema in garden_core::schema::ALL {
            let mut rows = db
                .conn()
                .query(
                    "SELECT name FROM sqlite_master WHERE type='table' AND name=?1",
                    [schema.table],
                )
                .await
                .unwrap();
            let row = rows.next().await.unwrap();
            assert!(row.is_some(), "table '{}' should exist", schema.table);
        }
    }

    #[tokio::test]
    async fn generate_id_correct_format() {
        let db = test_db().await;
        let id = db.generate_id("loc").await.unwrap();
        assert!(id.starts_with("loc-"), "ID should start with 'loc-': {id}");
        assert_eq!(
            id.len(),
            12,
            "ID should be 12 chars (3 prefix + 1 dash + 8 hex): {id}"
        );

        let hex_part = &id[4..];
        assert!(
            hex_part.chars().all(|c| c.is_ascii_hexdigit()),
            "Random part should be hex: {hex_part}"
        );
    }

    #[tokio::test]
    async fn generate_id_all_prefixes() {
        let db = test_db().await;
        for prefix in garden_core::ids::ALL_PREFIXES {
            let id = db.generate_id(prefix).await.unwrap();
            assert!(id.starts_with(&format!("{prefix}-")));
        }
    }

    #[tokio::test]
    async fn generate_id_uniqueness() {
        let db = test_db().await;
        let mut ids = HashSet::new();
        for _ in 0..100 {
            let id = db.generate_id("tst").await.unwrap();
            assert!(ids.insert(id.clone()), "Duplicate ID generated: {id}");
        }
    }

    #[tokio::test]
    async fn idempotent_migrations() {
        let db = test_db().await;
        // Second run must be a no-op
        db.run_migrations().await.unwrap();
    }

    #[tokio::test]
    async fn foreign_keys_enabled() {
        let db = test_db().await;
        let result = db
            .conn()
            .execute(
                "INSERT INTO seeds (id, plant_id) VALUES ('sed-t1', 'plt-missing')",
                (),
            )
            .await;
        assert!(result.is_err(), "dangling seed.plant_id should be rejected");
    }

    #[tokio::test]
    async fn verify_schema_rejects_undeclared_column() {
        const BOGUS: EntitySchema = EntitySchema {
            kind: EntityKind::Pot,
            table: "pots",
            fields: &[FieldSpec {
                name: "volume_litres",
                ty: FieldType::Real,
                required: false,
                unique: false,
            }],
        };
        let db = test_db().await;
        let err = db.verify_schema(&[BOGUS]).await.unwrap_err();
        assert!(
            matches!(&err, DatabaseError::Migration(msg) if msg.contains("volume_litres")),
            "unexpected error: {err}"
        );
    }

    #[tokio::test]
    async fn verify_schema_rejects_missing_table() {
        const BOGUS: EntitySchema = EntitySchema {
            kind: EntityKind::Pot,
            table: "greenhouses",
            fields: &[],
        };
        let db = test_db().await;
        assert!(matches!(
            db.verify_schema(&[BOGUS]).await,
            Err(DatabaseError::Migration(_))
        ));
    }

    #[tokio::test]
    async fn unique_names_enforced_by_engine() {
        let db = test_db().await;
        db.conn()
            .execute("INSERT INTO pots (id, name) VALUES ('pot-t1', 'Blue')", ())
            .await
            .unwrap();
        let err = db
            .conn()
            .execute("INSERT INTO pots (id, name) VALUES ('pot-t2', 'Blue')", ())
            .await
            .unwrap_err();
        let mapped = DatabaseError::from_write(EntityKind::Pot, &[("name", "Blue")], err);
        match mapped {
            DatabaseError::Validation(errors) => {
                assert!(errors.has("name"));
            }
            other => panic!("expected validation error, got {other}"),
        }
    }
}
