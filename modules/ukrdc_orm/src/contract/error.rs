//! Error taxonomy for schema access

use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    /// Row looked up by key does not exist
    #[error("{resource} not found: {id}")]
    NotFound {
        /// Entity kind (patientrecord, masterrecord, ...)
        resource: String,
        /// Key that was looked up
        id: String,
    },

    #[error("database error: {0}")]
    Database(#[from] DbErr),

    #[error("configuration error: {0}")]
    Config(#[from] figment::Error),

    #[error("validation error: {message}")]
    Validation { message: String },
}

impl SchemaError {
    pub fn not_found(resource: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
            id: id.into(),
        }
    }
}
