//! JTRACE enterprise master patient index
//!
//! A `master_record` groups the `person` rows believed to be the same human;
//! `link_record` holds the membership and `work_item` the pending merge
//! decisions.

pub mod audit;
pub mod link_record;
pub mod master_record;
pub mod person;
pub mod pid_xref;
pub mod work_item;
