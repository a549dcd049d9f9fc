//! Domain helpers shared across the galleria crates.
//!
//! This crate has no internal dependencies so the database layer, the API
//! server, and any future ingestion tooling can all build on it.

pub mod error;
pub mod pagination;
pub mod shortid;
pub mod types;
