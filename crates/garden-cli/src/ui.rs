//! Terminal preferences for table output, fixed once at startup.

use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::{GlobalFlags, OutputFormat};

/// Narrower `COLUMNS` values are ignored rather than squeezing every column.
const MIN_TERM_WIDTH: usize = 40;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct UiPrefs {
    pub table_color: bool,
    pub term_width: Option<usize>,
}

impl UiPrefs {
    /// Color only for interactive table output, and never under `NO_COLOR`.
    fn resolve(flags: &GlobalFlags, is_tty: bool, no_color: bool, columns: Option<&str>) -> Self {
        let table_color = is_tty && !no_color && !flags.quiet && flags.format == OutputFormat::Table;
        let term_width = columns
            .and_then(|raw| raw.trim().parse::<usize>().ok())
            .filter(|width| *width >= MIN_TERM_WIDTH);
        Self {
            table_color,
            term_width,
        }
    }
}

static UI_PREFS: OnceLock<UiPrefs> = OnceLock::new();

pub fn init(flags: &GlobalFlags) {
    let columns = std::env::var("COLUMNS").ok();
    let prefs = UiPrefs::resolve(
        flags,
        std::io::stdout().is_terminal(),
        std::env::var_os("NO_COLOR").is_some(),
        columns.as_deref(),
    );
    let _ = UI_PREFS.set(prefs);
}

/// Plain output until [`init`] has run.
#[must_use]
pub fn prefs() -> UiPrefs {
    UI_PREFS.get().copied().unwrap_or_default()
}
