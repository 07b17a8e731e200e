//! Infrastructure - connection bootstrap and SeaORM storage

pub mod db;
pub mod storage;
