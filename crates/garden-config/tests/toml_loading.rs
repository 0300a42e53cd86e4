//! Integration tests for layered configuration loading.
//!
//! Uses `figment::Jail` for sandboxed working directory and env var changes.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use garden_config::{ConfigError, GardenConfig};
use pretty_assertions::assert_eq;

/// Point the user-level config dir into the jail so a real
/// `~/.config/garden/config.toml` cannot leak into the test.
fn isolate_user_config(jail: &mut Jail) {
    let dir = jail.directory().display().to_string();
    jail.set_env("XDG_CONFIG_HOME", dir);
}

#[test]
fn loads_sections_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[database]
path = "/var/lib/garden/garden.db"

[general]
default_limit = 50
"#,
        )?;

        let config: GardenConfig = Figment::from(Serialized::defaults(GardenConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.database.path, "/var/lib/garden/garden.db");
        assert_eq!(config.general.default_limit, 50);
        Ok(())
    });
}

#[test]
fn missing_keys_keep_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[general]\n")?;

        let config: GardenConfig = Figment::from(Serialized::defaults(GardenConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.database.path, ".garden/garden.db");
        assert_eq!(config.general.default_limit, 20);
        Ok(())
    });
}

#[test]
fn project_file_is_picked_up() {
    Jail::expect_with(|jail| {
        isolate_user_config(jail);
        std::fs::create_dir(jail.directory().join(".garden")).map_err(|e| e.to_string())?;
        jail.create_file(".garden/config.toml", "[general]\ndefault_limit = 7\n")?;

        let config = GardenConfig::load().map_err(|e| e.to_string())?;
        assert_eq!(config.general.default_limit, 7);
        Ok(())
    });
}

#[test]
fn env_beats_project_file() {
    Jail::expect_with(|jail| {
        isolate_user_config(jail);
        std::fs::create_dir(jail.directory().join(".garden")).map_err(|e| e.to_string())?;
        jail.create_file(
            ".garden/config.toml",
            "[database]\npath = \"from-file.db\"\n",
        )?;
        jail.set_env("GARDEN_DATABASE__PATH", ":memory:");
        jail.set_env("GARDEN_GENERAL__DEFAULT_LIMIT", "3");

        let config = GardenConfig::load().map_err(|e| e.to_string())?;
        assert_eq!(config.database.path, ":memory:");
        assert!(config.database.is_in_memory());
        assert_eq!(config.general.default_limit, 3);
        Ok(())
    });
}

#[test]
fn load_rejects_zero_limit() {
    Jail::expect_with(|jail| {
        isolate_user_config(jail);
        jail.set_env("GARDEN_GENERAL__DEFAULT_LIMIT", "0");
        assert!(matches!(
            GardenConfig::load(),
            Err(ConfigError::InvalidValue { .. })
        ));
        Ok(())
    });
}

#[test]
fn malformed_toml_is_figment_error() {
    Jail::expect_with(|jail| {
        isolate_user_config(jail);
        std::fs::create_dir(jail.directory().join(".garden")).map_err(|e| e.to_string())?;
        jail.create_file(".garden/config.toml", "[general\ndefault_limit = ")?;
        assert!(matches!(
            GardenConfig::load(),
            Err(ConfigError::Figment(_))
        ));
        Ok(())
    });
}
