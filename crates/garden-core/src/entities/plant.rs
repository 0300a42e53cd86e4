use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A plant taxon or cultivar, not an individual specimen.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Plant {
    pub id: String,
    /// Common name, e.g. `Strawberry`.
    pub common_name: String,
    /// Variety, e.g. `Albion`.
    pub variety: Option<String>,
    /// Species, e.g. `Fragaria x ananassa`.
    pub species: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
