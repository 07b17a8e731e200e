//! Generated facility error statistics and data-health tables

pub mod error_history;
pub mod last_run_times;
pub mod multiple_ukrdcid;
