//! ID prefix constants.
//!
//! Every record ID is `<prefix>-<8 hex chars>`, generated by the storage engine.

use crate::enums::EntityKind;

pub const PREFIX_LOCATION: &str = "loc";
pub const PREFIX_POT: &str = "pot";
pub const PREFIX_PLANT: &str = "plt";
pub const PREFIX_SEED: &str = "sed";
pub const PREFIX_PLANTING: &str = "pnt";

pub const ALL_PREFIXES: &[&str] = &[
    PREFIX_LOCATION,
    PREFIX_POT,
    PREFIX_PLANT,
    PREFIX_SEED,
    PREFIX_PLANTING,
];

/// ID prefix for an entity kind.
#[must_use]
pub const fn prefix_for(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::Location => PREFIX_LOCATION,
        EntityKind::Pot => PREFIX_POT,
        EntityKind::Plant => PREFIX_PLANT,
        EntityKind::Seed => PREFIX_SEED,
        EntityKind::Planting => PREFIX_PLANTING,
    }
}

/// Guess the entity kind from an ID's prefix.
#[must_use]
pub fn kind_of(id: &str) -> Option<EntityKind> {
    let (prefix, _) = id.split_once('-')?;
    EntityKind::ALL
        .iter()
        .copied()
        .find(|kind| prefix_for(*kind) == prefix)
}
