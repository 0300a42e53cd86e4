use clap::{Args, Subcommand};

use crate::cli::subcommands::{
    LocationCommands, PlantCommands, PlantingCommands, PotCommands, SeedCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Garden locations (beds, borders, rooms).
    Location {
        #[command(subcommand)]
        action: LocationCommands,
    },
    /// Pots and other containers.
    Pot {
        #[command(subcommand)]
        action: PotCommands,
    },
    /// Plant species and varieties.
    Plant {
        #[command(subcommand)]
        action: PlantCommands,
    },
    /// Seed lots.
    Seed {
        #[command(subcommand)]
        action: SeedCommands,
    },
    /// Planting events.
    Planting {
        #[command(subcommand)]
        action: PlantingCommands,
    },
    /// Print the JSON schema of an entity.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Entity name: location, pot, plant, seed, planting
    pub entity: String,
}
