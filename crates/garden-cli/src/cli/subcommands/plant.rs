use clap::Subcommand;

/// Plant commands.
#[derive(Clone, Debug, Subcommand)]
pub enum PlantCommands {
    /// Create a plant.
    Create {
        #[arg(long)]
        common_name: String,
        #[arg(long)]
        variety: Option<String>,
        #[arg(long)]
        species: Option<String>,
    },
    /// Update a plant. Pass an empty string to clear an optional field.
    Update {
        id: String,
        #[arg(long)]
        common_name: Option<String>,
        #[arg(long)]
        variety: Option<String>,
        #[arg(long)]
        species: Option<String>,
    },
    /// List plants, newest first.
    List {
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Get a plant by ID.
    Get { id: String },
    /// Delete a plant and its seed lots.
    Delete { id: String },
    /// One-line summary of a plant.
    Render { id: String },
    /// Seed lots of a plant.
    Seeds { id: String },
    /// Plantings of a plant.
    Plantings { id: String },
}
