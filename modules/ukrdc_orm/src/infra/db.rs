//! Connection bootstrap

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::config::DatabaseConfig;
use crate::contract::SchemaError;

/// Opens a pooled connection using `config`.
pub async fn connect(config: &DatabaseConfig) -> Result<DatabaseConnection, SchemaError> {
    if config.min_connections > config.max_connections {
        return Err(SchemaError::Validation {
            message: format!(
                "min_connections ({}) exceeds max_connections ({})",
                config.min_connections, config.max_connections
            ),
        });
    }

    let mut options = ConnectOptions::new(config.url.clone());
    options
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_timeout(config.connect_timeout)
        .sqlx_logging(config.sqlx_logging);

    info!(
        url = %config.redacted_url(),
        max_connections = config.max_connections,
        "connecting to database"
    );
    Ok(Database::connect(options).await?)
}
