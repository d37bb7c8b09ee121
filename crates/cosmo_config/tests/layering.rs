//! Integration tests for layered configuration loading.
//!
//! Uses figment::Jail for sandboxed files and env vars.

use cosmo_config::{ConfigError, CosmoConfig};
use cosmo_zodiac::MayanCatalog;
use figment::Jail;
use pretty_assertions::assert_eq;

#[test]
fn defaults_without_sources() {
    Jail::expect_with(|_jail| {
        let config = CosmoConfig::load().map_err(|e| e.to_string())?;
        assert_eq!(config, CosmoConfig::default());
        Ok(())
    });
}

#[test]
fn project_file_is_merged() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "cosmo.toml",
            r#"
[profile]
mayan_catalog = "abbreviated"

[compatibility]
best_limit = 3
seed = 42
"#,
        )?;

        let config = CosmoConfig::load().map_err(|e| e.to_string())?;
        assert_eq!(config.profile.mayan_catalog, MayanCatalog::Abbreviated);
        assert_eq!(config.compatibility.best_limit, 3);
        assert_eq!(config.compatibility.challenging_limit, 4);
        assert_eq!(config.compatibility.seed, Some(42));
        Ok(())
    });
}

#[test]
fn env_beats_project_file() {
    Jail::expect_with(|jail| {
        jail.create_file("cosmo.toml", "[compatibility]\nseed = 1\n")?;
        jail.set_env("COSMO_COMPATIBILITY__SEED", "7");
        jail.set_env("COSMO_LOGGING__LEVEL", "debug");

        let config = CosmoConfig::load().map_err(|e| e.to_string())?;
        assert_eq!(config.compatibility.seed, Some(7));
        assert_eq!(config.logging.level, "debug");
        Ok(())
    });
}

#[test]
fn explicit_file_ignores_project_file() {
    Jail::expect_with(|jail| {
        jail.create_file("cosmo.toml", "[compatibility]\nbest_limit = 2\n")?;
        jail.create_file("other.toml", "[compatibility]\nchallenging_limit = 1\n")?;

        let config = CosmoConfig::from_file("other.toml").map_err(|e| e.to_string())?;
        assert_eq!(config.compatibility.best_limit, 6);
        assert_eq!(config.compatibility.challenging_limit, 1);
        Ok(())
    });
}

#[test]
fn invalid_values_rejected() {
    Jail::expect_with(|jail| {
        jail.create_file("cosmo.toml", "[compatibility]\nbest_limit = 0\n")?;
        let err = CosmoConfig::load().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "compatibility.best_limit"));

        jail.create_file("cosmo.toml", "[compatibility]\nbest_limit = 10\n")?;
        let err = CosmoConfig::load().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "compatibility.best_limit"));

        jail.create_file("cosmo.toml", "[profile]\nmayan_catalog = \"aztec\"\n")?;
        let err = CosmoConfig::load().unwrap_err();
        assert!(matches!(err, ConfigError::Figment(_)));
        Ok(())
    });
}

#[test]
fn env_limit_above_maximum_rejected() {
    Jail::expect_with(|jail| {
        jail.set_env("COSMO_COMPATIBILITY__CHALLENGING_LIMIT", "5");
        let err = CosmoConfig::load().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "compatibility.challenging_limit"));
        Ok(())
    });
}

#[test]
fn catalog_aliases_accepted_from_file_and_env() {
    Jail::expect_with(|jail| {
        jail.create_file("cosmo.toml", "[profile]\nmayan_catalog = \"legacy\"\n")?;
        let config = CosmoConfig::load().map_err(|e| e.to_string())?;
        assert_eq!(config.profile.mayan_catalog, MayanCatalog::Abbreviated);

        jail.set_env("COSMO_PROFILE__MAYAN_CATALOG", "full");
        let config = CosmoConfig::load().map_err(|e| e.to_string())?;
        assert_eq!(config.profile.mayan_catalog, MayanCatalog::Tzolkin);
        Ok(())
    });
}
