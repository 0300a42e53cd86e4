//! Entity structs for all garden records.
//!
//! Each entity maps to a table in the libSQL database (see `garden-db`'s
//! initial migration). All structs derive `Serialize`, `Deserialize`, and
//! `JsonSchema` for JSON roundtrip and schema validation.

mod location;
mod plant;
mod planting;
mod pot;
mod seed;

pub use location::Location;
pub use plant::Plant;
pub use planting::Planting;
pub use pot::Pot;
pub use seed::Seed;
