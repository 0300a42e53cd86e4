//! `[general]` section: settings shared by every `grdn` command.

use serde::{Deserialize, Serialize};

/// Row cap for `list` commands when neither `--limit` nor config sets one.
pub const DEFAULT_LIST_LIMIT: u32 = 20;

const fn default_limit() -> u32 {
    DEFAULT_LIST_LIMIT
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Rows returned by list and navigation commands.
    #[serde(default = "default_limit")]
    pub default_limit: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_limit: DEFAULT_LIST_LIMIT,
        }
    }
}
