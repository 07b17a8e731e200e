//! Connection configuration for the UKRDC databases
//!
//! Values are layered with figment: built-in defaults, then an optional YAML
//! file, then `UKRDC__`-prefixed environment variables using `__` as the
//! nesting separator (e.g. `UKRDC__EMPI__URL`).

use std::fmt;
use std::path::Path;
use std::time::Duration;

use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::contract::SchemaError;

/// Environment variable prefix for configuration overrides.
pub const ENV_PREFIX: &str = "UKRDC__";

/// The separately deployed databases this crate maps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LogicalDatabase {
    Ukrdc,
    Empi,
    Errors,
    Stats,
    XmlArchive,
}

impl LogicalDatabase {
    pub const ALL: [LogicalDatabase; 5] = [
        Self::Ukrdc,
        Self::Empi,
        Self::Errors,
        Self::Stats,
        Self::XmlArchive,
    ];

    /// Key of this database in the configuration.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ukrdc => "ukrdc",
            Self::Empi => "empi",
            Self::Errors => "errorsdb",
            Self::Stats => "stats",
            Self::XmlArchive => "xmlarchive",
        }
    }
}

impl fmt::Display for LogicalDatabase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Connection settings for one database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatabaseConfig {
    /// sqlx connection URL (`postgres://...` or `sqlite::memory:`)
    pub url: String,

    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    #[serde(default = "default_min_connections")]
    pub min_connections: u32,

    /// Accepts humantime strings such as `"10s"`.
    #[serde(default = "default_connect_timeout", with = "humantime_serde")]
    pub connect_timeout: Duration,

    /// Log every SQL statement through sqlx.
    #[serde(default)]
    pub sqlx_logging: bool,
}

impl DatabaseConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            connect_timeout: default_connect_timeout(),
            sqlx_logging: false,
        }
    }

    /// The URL with any password masked, suitable for logs.
    pub fn redacted_url(&self) -> String {
        match url::Url::parse(&self.url) {
            Ok(mut parsed) if parsed.password().is_some() => {
                // Only fails for URLs that cannot carry credentials.
                let _ = parsed.set_password(Some("***"));
                parsed.to_string()
            }
            _ => self.url.clone(),
        }
    }
}

/// Configuration for every logical database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub ukrdc: DatabaseConfig,
    pub empi: DatabaseConfig,
    pub errorsdb: DatabaseConfig,
    pub stats: DatabaseConfig,
    pub xmlarchive: DatabaseConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ukrdc: DatabaseConfig::new("postgres://localhost:5432/UKRDC3"),
            empi: DatabaseConfig::new("postgres://localhost:5432/JTRACE"),
            errorsdb: DatabaseConfig::new("postgres://localhost:5432/errorsdb"),
            stats: DatabaseConfig::new("postgres://localhost:5432/statsdb"),
            xmlarchive: DatabaseConfig::new("postgres://localhost:5432/xmlarchive"),
        }
    }
}

impl Config {
    /// Layered figment: defaults, then `path` if given, then the environment.
    pub fn figment(path: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Config::default()));
        if let Some(path) = path {
            figment = figment.merge(Yaml::file(path));
        }
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    pub fn load(path: Option<&Path>) -> Result<Self, SchemaError> {
        Ok(Self::figment(path).extract()?)
    }

    pub fn database(&self, database: LogicalDatabase) -> &DatabaseConfig {
        match database {
            LogicalDatabase::Ukrdc => &self.ukrdc,
            LogicalDatabase::Empi => &self.empi,
            LogicalDatabase::Errors => &self.errorsdb,
            LogicalDatabase::Stats => &self.stats,
            LogicalDatabase::XmlArchive => &self.xmlarchive,
        }
    }
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

fn default_connect_timeout() -> Duration {
    Duration::from_secs(30)
}
