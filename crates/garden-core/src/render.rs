//! Human-readable one-line summaries for each entity.
//!
//! Absent optional values render as `-`. Seed and planting summaries need
//! their related records, which the caller resolves first.

use crate::entities::{Location, Plant, Pot, Seed};

const ABSENT: &str = "-";

fn or_absent(value: Option<&str>) -> &str {
    value.unwrap_or(ABSENT)
}

#[must_use]
pub fn location(location: &Location) -> String {
    format!("name={}", location.name)
}

#[must_use]
pub fn pot(pot: &Pot) -> String {
    format!("name={}", pot.name)
}

#[must_use]
pub fn plant(plant: &Plant) -> String {
    format!(
        "common_name={}, variety={}, species={}",
        plant.common_name,
        or_absent(plant.variety.as_deref()),
        or_absent(plant.species.as_deref())
    )
}

/// Seed lots are summarized by the plant they belong to.
#[must_use]
pub fn seed(_seed: &Seed, plant: &Plant) -> String {
    format!(
        "plant={}, variety={}, species={}",
        plant.common_name,
        or_absent(plant.variety.as_deref()),
        or_absent(plant.species.as_deref())
    )
}

/// Resolved relations of a planting, as needed by [`planting`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PlantingRelations<'a> {
    pub plant: Option<&'a Plant>,
    /// The seed lot together with the plant that owns it.
    pub seed: Option<(&'a Seed, &'a Plant)>,
    pub pot: Option<&'a Pot>,
    pub location: Option<&'a Location>,
}

/// Prefers the plant over the seed, and the pot over the location.
#[must_use]
pub fn planting(relations: &PlantingRelations<'_>) -> String {
    let what = match (relations.plant, relations.seed) {
        (Some(p), _) => format!("plant={}", plant(p)),
        (None, Some((s, owner))) => format!("seed={}", seed(s, owner)),
        (None, None) => format!("seed={ABSENT}"),
    };
    let place = match (relations.pot, relations.location) {
        (Some(p), _) => format!("pot={}", pot(p)),
        (None, Some(l)) => format!("location={}", location(l)),
        (None, None) => format!("location={ABSENT}"),
    };
    format!("{what}, {place}")
}
