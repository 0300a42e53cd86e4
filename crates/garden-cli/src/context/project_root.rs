//! Where the garden database lives for a given invocation.

use std::path::{Path, PathBuf};

use garden_config::{DatabaseConfig, PROJECT_DIR};

/// Nearest ancestor of `start` (inclusive) that holds a `.garden` directory.
fn project_root(start: &Path) -> Option<&Path> {
    start.ancestors().find(|dir| dir.join(PROJECT_DIR).is_dir())
}

/// Database path for a run started in `cwd`.
///
/// `--db` is taken verbatim. Otherwise a relative `database.path` resolves
/// against the enclosing garden project, or `cwd` when there is none, so
/// `grdn` run from `beds/north` still finds `<root>/.garden/garden.db`.
#[must_use]
pub fn resolve_database_path(cwd: &Path, db_override: Option<&str>, config: &DatabaseConfig) -> PathBuf {
    if let Some(path) = db_override {
        return PathBuf::from(path);
    }
    config.resolve(project_root(cwd).unwrap_or(cwd))
}
