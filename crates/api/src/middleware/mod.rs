//! Request-path middleware.
//!
//! - [`cache::response_cache_layer`] -- read-through response caching for
//!   the cacheable GET routes.
//! - [`rate_limit::rate_limit_layer`] -- fixed-window admission control
//!   for everything under `/api`.

pub mod cache;
pub mod rate_limit;
