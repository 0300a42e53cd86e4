mod location;
mod plant;
mod planting;
mod pot;
mod seed;

pub use location::LocationCommands;
pub use plant::PlantCommands;
pub use planting::PlantingCommands;
pub use pot::PotCommands;
pub use seed::SeedCommands;
