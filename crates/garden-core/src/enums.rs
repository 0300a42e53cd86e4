//! Entity kinds for the garden tracker.
//!
//! Uses `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of record an ID, table, or violation refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Location,
    Pot,
    Plant,
    Seed,
    Planting,
}

impl EntityKind {
    pub const ALL: [Self; 5] = [
        Self::Location,
        Self::Pot,
        Self::Plant,
        Self::Seed,
        Self::Planting,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Location => "location",
            Self::Pot => "pot",
            Self::Plant => "plant",
            Self::Seed => "seed",
            Self::Planting => "planting",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
