use clap::Subcommand;

/// Planting commands.
#[derive(Clone, Debug, Subcommand)]
pub enum PlantingCommands {
    /// Record a planting.
    Create {
        #[arg(long)]
        plant: Option<String>,
        #[arg(long)]
        seed: Option<String>,
        #[arg(long)]
        pot: Option<String>,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        brand: Option<String>,
        #[arg(long)]
        source: Option<String>,
        #[arg(long)]
        price: Option<f64>,
        /// YYYY-MM-DD
        #[arg(long)]
        purchase_date: Option<String>,
        /// YYYY-MM-DD
        #[arg(long)]
        seeding_date: Option<String>,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Update a planting. Pass an empty value to clear any field.
    Update {
        id: String,
        #[arg(long)]
        plant: Option<String>,
        #[arg(long)]
        seed: Option<String>,
        #[arg(long)]
        pot: Option<String>,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        brand: Option<String>,
        #[arg(long)]
        source: Option<String>,
        #[arg(long)]
        price: Option<String>,
        #[arg(long)]
        purchase_date: Option<String>,
        #[arg(long)]
        seeding_date: Option<String>,
        #[arg(long)]
        notes: Option<String>,
    },
    /// List plantings, newest first.
    List {
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Get a planting by ID.
    Get { id: String },
    /// Delete a planting.
    Delete { id: String },
    /// One-line summary of a planting.
    Render { id: String },
    /// Plantings with no plant, seed, pot, or location.
    Unanchored,
}
