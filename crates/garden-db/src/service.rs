//! Service layer hosting every repository method.
//!
//! `GardenService` wraps `GardenDb` (raw database access). All repo methods
//! are implemented as `impl GardenService` blocks under `repos/`.

use crate::GardenDb;
use crate::error::DatabaseError;

/// Orchestrates validation, writes, and relation handling for garden records.
///
/// Every mutation method follows this protocol:
/// 1. Load the current record (updates and deletes)
/// 2. Validate changed fields, collecting every violation
/// 3. Check referenced records exist
/// 4. Execute SQL (deletes run cascade/clear inside one transaction)
pub struct GardenService {
    db: GardenDb,
}

impl GardenService {
    /// Create a new service wrapping a local database.
    ///
    /// # Arguments
    ///
    /// * `db_path` — Path to the libSQL database file, or `":memory:"` for tests.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local(db_path: &str) -> Result<Self, DatabaseError> {
        let db = GardenDb::open_local(db_path).await?;
        Ok(Self { db })
    }

    /// Create from an existing `GardenDb`.
    #[must_use]
    pub const fn from_db(db: GardenDb) -> Self {
        Self { db }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &GardenDb {
        &self.db
    }
}
