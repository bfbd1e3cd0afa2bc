//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - SQLite repository implementations
//! - [`spreadsheet`] - `.xlsx` rendering for link exports

pub mod persistence;
pub mod spreadsheet;
