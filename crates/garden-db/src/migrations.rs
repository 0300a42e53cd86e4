//! Embedded schema migrations, applied every time a database is opened.
//!
//! Each script only uses `IF NOT EXISTS`, so re-applying to an existing
//! garden file is a no-op.

use crate::GardenDb;
use crate::error::DatabaseError;

/// Ordered `(name, sql)` pairs. Locations, pots, plants, seeds, plantings.
const MIGRATIONS: &[(&str, &str)] = &[("001_initial", include_str!("../migrations/001_initial.sql"))];

impl GardenDb {
    pub(crate) async fn run_migrations(&self) -> Result<(), DatabaseError> {
        for (name, sql) in MIGRATIONS {
            self.conn
                .execute_batch(sql)
                .await
                .map_err(|e| DatabaseError::Migration(format!("{name}: {e}")))?;
            tracing::debug!(migration = *name, "migration applied");
        }
        Ok(())
    }
}
