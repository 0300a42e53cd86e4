use std::path::Path;

use anyhow::Context;
use garden_config::{DatabaseConfig, GardenConfig};
use garden_db::service::GardenService;

use super::project_root::resolve_database_path;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub service: GardenService,
    pub config: GardenConfig,
}

impl AppContext {
    /// Open the garden database named by `db_override` or the configuration.
    ///
    /// See [`resolve_database_path`]. The parent directory is created when missing.
    pub async fn init(config: GardenConfig, db_override: Option<&str>) -> anyhow::Result<Self> {
        let cwd = std::env::current_dir().context("failed to read current directory")?;
        let db_path = resolve_database_path(&cwd, db_override, &config.database);
        ensure_parent_dir(&db_path)?;

        let db_path_str = db_path.to_string_lossy();
        tracing::debug!(path = %db_path_str, "opening garden database");
        let service = GardenService::new_local(&db_path_str)
            .await
            .with_context(|| format!("failed to open database at {db_path_str}"))?;

        Ok(Self { service, config })
    }

    /// Limit used by list commands when neither `--limit` flag is given.
    pub const fn default_limit(&self) -> u32 {
        self.config.general.default_limit
    }
}

fn ensure_parent_dir(db_path: &Path) -> anyhow::Result<()> {
    let config = DatabaseConfig {
        path: db_path.to_string_lossy().into_owned(),
    };
    if let Some(parent) = config.parent_dir()
        && !parent.is_dir()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::{AppContext, ensure_parent_dir};
    use garden_config::GardenConfig;

    #[test]
    fn creates_missing_parent_directory() {
        let temp = TempDir::new().expect("tempdir should create");
        let db = temp.path().join("nested/dir/garden.db");
        ensure_parent_dir(&db).expect("parent should be created");
        assert!(temp.path().join("nested/dir").is_dir());
    }

    #[test]
    fn in_memory_needs_no_directory() {
        ensure_parent_dir(std::path::Path::new(":memory:")).expect("nothing to create");
    }

    #[tokio::test]
    async fn override_path_opens_database() {
        let temp = TempDir::new().expect("tempdir should create");
        let db = temp.path().join("yard.db");
        let ctx = AppContext::init(GardenConfig::default(), db.to_str())
            .await
            .expect("context should init");
        assert_eq!(ctx.default_limit(), 20);
        assert!(db.exists());
    }
}
