use clap::Subcommand;

/// Pot commands.
#[derive(Clone, Debug, Subcommand)]
pub enum PotCommands {
    /// Create a pot.
    Create {
        #[arg(long)]
        name: String,
    },
    /// Rename a pot.
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
    },
    /// List pots, newest first.
    List {
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Get a pot by ID.
    Get { id: String },
    /// Delete a pot, clearing it from plantings.
    Delete { id: String },
    /// One-line summary of a pot.
    Render { id: String },
    /// Plantings in a pot.
    Plantings { id: String },
}
