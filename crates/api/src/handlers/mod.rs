//! HTTP handlers, one module per resource group.

pub mod collections;
pub mod feed;
pub mod media;
pub mod search;
