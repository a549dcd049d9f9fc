//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts (ingestion tooling and tests)
//! - Narrow `FromRow` projections for the read queries that don't need
//!   the full row

pub mod collection;
pub mod media;
