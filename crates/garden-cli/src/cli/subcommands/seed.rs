use clap::Subcommand;

/// Seed lot commands.
#[derive(Clone, Debug, Subcommand)]
pub enum SeedCommands {
    /// Record a seed lot.
    Create {
        /// Owning plant ID.
        #[arg(long)]
        plant: String,
        #[arg(long)]
        brand: Option<String>,
        #[arg(long)]
        source: Option<String>,
        #[arg(long)]
        quantity: Option<i16>,
        #[arg(long)]
        days_to_germination: Option<i16>,
        #[arg(long)]
        days_to_harvest: Option<i16>,
        /// YYYY-MM-DD
        #[arg(long)]
        purchase_date: Option<String>,
        /// YYYY-MM-DD
        #[arg(long)]
        expiration_date: Option<String>,
        #[arg(long)]
        disposed: bool,
        #[arg(long)]
        description: Option<String>,
    },
    /// Update a seed lot. Pass an empty value to clear any optional field.
    Update {
        id: String,
        #[arg(long)]
        plant: Option<String>,
        #[arg(long)]
        brand: Option<String>,
        #[arg(long)]
        source: Option<String>,
        #[arg(long)]
        quantity: Option<String>,
        #[arg(long)]
        days_to_germination: Option<String>,
        #[arg(long)]
        days_to_harvest: Option<String>,
        #[arg(long)]
        purchase_date: Option<String>,
        #[arg(long)]
        expiration_date: Option<String>,
        #[arg(long)]
        disposed: Option<bool>,
        #[arg(long)]
        description: Option<String>,
    },
    /// List seed lots, newest first.
    List {
        /// Include disposed lots.
        #[arg(long)]
        all: bool,
        /// Only lots expired as of today.
        #[arg(long)]
        expired: bool,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Get a seed lot by ID.
    Get { id: String },
    /// Delete a seed lot, clearing it from plantings.
    Delete { id: String },
    /// One-line summary of a seed lot.
    Render { id: String },
    /// Plantings sown from a seed lot.
    Plantings { id: String },
}
