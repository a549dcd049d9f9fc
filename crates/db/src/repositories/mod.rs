//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods
//! that accept `&PgPool` as the first argument. The catalog is read-mostly:
//! besides `create` (ingestion tooling and tests), the only mutation is
//! `add_views`, the target of the periodic view-count flush.

pub mod collection_repo;
pub mod media_repo;

pub use collection_repo::CollectionRepo;
pub use media_repo::MediaRepo;
