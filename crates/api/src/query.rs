//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Opaque pagination cursor (`?cursor=N`).
///
/// The value is the row offset already consumed; absent means start from
/// the beginning. Negative values are clamped in the handlers via
/// `galleria_core::pagination::clamp_cursor`.
#[derive(Debug, Deserialize)]
pub struct CursorParams {
    pub cursor: Option<i64>,
}
