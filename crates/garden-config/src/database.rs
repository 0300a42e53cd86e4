//! Local libSQL database configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Directory holding project-local garden state.
pub const PROJECT_DIR: &str = ".garden";

fn default_path() -> String {
    format!("{PROJECT_DIR}/garden.db")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Database file path, or `:memory:` for a throwaway database.
    #[serde(default = "default_path")]
    pub path: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}

impl DatabaseConfig {
    pub fn is_in_memory(&self) -> bool {
        self.path == ":memory:"
    }

    /// Directory that must exist before the database file can be created.
    ///
    /// `None` for in-memory databases and bare file names.
    pub fn parent_dir(&self) -> Option<&Path> {
        if self.is_in_memory() {
            return None;
        }
        Path::new(&self.path)
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
    }

    /// Resolve a relative path against `base`.
    pub fn resolve(&self, base: &Path) -> PathBuf {
        let path = Path::new(&self.path);
        if self.is_in_memory() || path.is_absolute() {
            path.to_path_buf()
        } else {
            base.join(path)
        }
    }
}
