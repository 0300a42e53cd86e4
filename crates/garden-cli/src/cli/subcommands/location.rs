use clap::Subcommand;

/// Location commands.
#[derive(Clone, Debug, Subcommand)]
pub enum LocationCommands {
    /// Create a location.
    Create {
        #[arg(long)]
        name: String,
    },
    /// Rename a location.
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
    },
    /// List locations, newest first.
    List {
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Get a location by ID.
    Get { id: String },
    /// Delete a location, clearing it from plantings.
    Delete { id: String },
    /// One-line summary of a location.
    Render { id: String },
    /// Plantings at a location.
    Plantings { id: String },
}
