//! Storage layer - database entities, migrations and repositories

pub mod entity;
pub mod migrations;
pub mod repositories;
