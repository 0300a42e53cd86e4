use clap::ValueEnum;

/// How `grdn` prints records.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON.
    Json,
    /// Aligned columns, one row per record.
    Table,
    /// Compact single-line JSON for piping.
    Raw,
}

/// Flags accepted by every `grdn` subcommand.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub format: OutputFormat,
    pub limit: Option<u32>,
    pub quiet: bool,
    pub verbose: bool,
    pub db: Option<String>,
}

impl GlobalFlags {
    /// Tracing filter used when `GARDEN_LOG` is unset. `--quiet` beats `--verbose`.
    #[must_use]
    pub const fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }

    /// Whether advisory notes (such as an unanchored planting) go to stderr.
    #[must_use]
    pub const fn show_notes(&self) -> bool {
        !self.quiet
    }
}
