//! Contract layer - types shared with consumers of the schema

pub mod error;
pub mod model;

pub use error::SchemaError;
pub use model::PatientDemographics;
