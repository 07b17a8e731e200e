//! Domain layer - data access interfaces

pub mod repository;

pub use repository::{EmpiRepository, PatientRecordRepository};
