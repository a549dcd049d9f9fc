/// Canonical entity identifiers are 128-bit UUIDs (v4, assigned at ingestion).
pub type EntityId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Which durable counter a pending view increment belongs to.
///
/// Used as part of the pending view-count buffer key so collection and
/// media increments with the same UUID can never collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Collection,
    Media,
}

impl EntityKind {
    /// Stable lowercase name for log fields.
    pub fn as_str(self) -> &'static str {
        match self {
            EntityKind::Collection => "collection",
            EntityKind::Media => "media",
        }
    }
}
