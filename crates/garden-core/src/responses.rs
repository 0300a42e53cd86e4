//! CLI response types returned as JSON by `grdn` commands.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::EntityKind;

/// A record removed as a consequence of deleting another.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DeletedRecord {
    pub entity: EntityKind,
    pub id: String,
}

/// Response from any `grdn <entity> delete`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DeleteResponse {
    pub entity: EntityKind,
    pub id: String,
    /// Dependent records deleted by cascade, children before parents.
    pub cascaded: Vec<DeletedRecord>,
    /// Number of references set to empty on surviving records.
    pub cleared_references: u64,
}

/// Response from `grdn <entity> render`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RenderResponse {
    pub entity: EntityKind,
    pub id: String,
    pub summary: String,
}
