//! UKRDC ORM
//!
//! SeaORM entities, relationships and migrations for the UK Renal Registry
//! clinical repository (UKRDC) and its satellite databases: the JTRACE master
//! patient index, the Mirth errors database, the statistics database and the
//! removed-XML archive.
//!
//! Each logical database has its own entity namespace and `Migrator`:
//!
//! | namespace      | migrator               |
//! |----------------|------------------------|
//! | [`ukrdc`]      | [`UkrdcMigrator`]      |
//! | [`empi`]       | [`EmpiMigrator`]       |
//! | [`errorsdb`]   | [`ErrorsMigrator`]     |
//! | [`stats`]      | [`StatsMigrator`]      |
//! | [`xmlarchive`] | [`XmlArchiveMigrator`] |

// Public exports
pub mod config;
pub use config::{Config, DatabaseConfig, LogicalDatabase};

pub mod contract;
pub use contract::{PatientDemographics, SchemaError};

pub mod domain;
pub use domain::{EmpiRepository, PatientRecordRepository};

pub mod utils;

pub mod infra;
pub use infra::db::connect;
pub use infra::storage::entity::{empi, errorsdb, stats, ukrdc, xmlarchive, ColumnInfo};
pub use infra::storage::migrations::{
    run as migrate, EmpiMigrator, ErrorsMigrator, MigrationCommand, StatsMigrator,
    UkrdcMigrator, XmlArchiveMigrator,
};
pub use infra::storage::repositories::{SeaOrmEmpiRepository, SeaOrmPatientRecordRepository};
