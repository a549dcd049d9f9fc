//! Galleria API server library.
//!
//! Exposes the building blocks (config, state, error handling, routes,
//! cache, counters) so integration tests and the binary entrypoint can
//! both access them.

pub mod background;
pub mod cache;
pub mod config;
pub mod counters;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod query;
pub mod router;
pub mod routes;
pub mod state;
pub mod views;
