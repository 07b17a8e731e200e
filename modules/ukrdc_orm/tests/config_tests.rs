//! Layered configuration tests

use std::path::Path;
use std::time::Duration;

use figment::Jail;
use ukrdc_orm::{Config, LogicalDatabase, SchemaError};

fn load(path: Option<&str>) -> Result<Config, SchemaError> {
    Config::load(path.map(Path::new))
}

#[test]
fn defaults_point_at_local_postgres() {
    Jail::expect_with(|_jail| {
        let config = load(None).map_err(|e| e.to_string())?;
        assert_eq!(config, Config::default());
        assert_eq!(
            config.database(LogicalDatabase::Empi).url,
            "postgres://localhost:5432/JTRACE"
        );
        assert_eq!(config.ukrdc.max_connections, 10);
        assert_eq!(config.ukrdc.connect_timeout, Duration::from_secs(30));
        Ok(())
    });
}

#[test]
fn yaml_file_overrides_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "ukrdc.yaml",
            r#"
ukrdc:
  url: postgres://ukrdc:secret@db:5432/UKRDC3
  max_connections: 4
  connect_timeout: 5s
stats:
  url: "sqlite::memory:"
"#,
        )?;

        let config = load(Some("ukrdc.yaml")).map_err(|e| e.to_string())?;
        assert_eq!(config.ukrdc.url, "postgres://ukrdc:secret@db:5432/UKRDC3");
        assert_eq!(config.ukrdc.max_connections, 4);
        assert_eq!(config.ukrdc.min_connections, 1);
        assert_eq!(config.ukrdc.connect_timeout, Duration::from_secs(5));
        assert_eq!(config.stats.url, "sqlite::memory:");
        assert_eq!(config.empi, Config::default().empi);
        assert_eq!(
            config.ukrdc.redacted_url(),
            "postgres://ukrdc:***@db:5432/UKRDC3"
        );
        Ok(())
    });
}

#[test]
fn environment_overrides_file() {
    Jail::expect_with(|jail| {
        jail.create_file("ukrdc.yaml", "empi:\n  url: postgres://file/JTRACE\n")?;
        jail.set_env("UKRDC__EMPI__URL", "postgres://env/JTRACE");
        jail.set_env("UKRDC__EMPI__SQLX_LOGGING", "true");
        jail.set_env("UKRDC__ERRORSDB__MAX_CONNECTIONS", "2");

        let config = load(Some("ukrdc.yaml")).map_err(|e| e.to_string())?;
        assert_eq!(config.empi.url, "postgres://env/JTRACE");
        assert!(config.empi.sqlx_logging);
        assert_eq!(config.errorsdb.max_connections, 2);
        Ok(())
    });
}

#[test]
fn unknown_keys_are_rejected() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "ukrdc.yaml",
            "ukrdc:\n  url: postgres://db/UKRDC3\n  pool_size: 3\n",
        )?;

        let result = load(Some("ukrdc.yaml"));
        assert!(matches!(result, Err(SchemaError::Config(_))));
        Ok(())
    });
}

#[tokio::test]
async fn connect_rejects_inverted_pool_bounds() {
    let mut config = ukrdc_orm::DatabaseConfig::new("sqlite::memory:");
    config.min_connections = 5;
    config.max_connections = 1;

    let result = ukrdc_orm::connect(&config).await;
    assert!(matches!(result, Err(SchemaError::Validation { .. })));
}
