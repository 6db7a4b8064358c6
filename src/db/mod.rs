//! Database module for SQLite operations.
//!
//! This module provides:
//! - Database initialization and schema creation
//! - SQLite pragma configuration
//! - The `Repository` storage handle for quotes

pub mod migrations;
pub mod repo;

pub use migrations::{drop_schema, init_db};
pub use repo::Repository;
