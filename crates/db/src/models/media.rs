//! Media entity model, enums, DTOs, and read projections.

use galleria_core::types::{EntityId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Kind of media asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "media_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Video,
    Gif,
}

/// A row from the `media` table. Every media item belongs to exactly one
/// collection.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Media {
    pub id: EntityId,
    pub collection_id: EntityId,
    pub title: Option<String>,
    pub description: Option<String>,
    pub media_type: MediaType,
    pub media_url: String,
    pub preview_url: String,
    pub file_hash: String,
    /// Durable counter; only mutated by the view-count flush.
    pub views: i64,
    pub likes: i64,
    /// Seconds, for video content.
    pub duration_secs: Option<i32>,
    pub width: Option<i32>,
    pub height: Option<i32>,
    /// NOT NULL in the database; defaults to `[]`.
    pub tags: serde_json::Value,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new media item.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMedia {
    pub collection_id: EntityId,
    pub title: Option<String>,
    pub description: Option<String>,
    pub media_type: MediaType,
    pub media_url: String,
    pub preview_url: String,
    pub file_hash: String,
    pub duration_secs: Option<i32>,
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub tags: Option<serde_json::Value>,
}

/// A hot-feed row: media preview joined with its owning collection summary.
#[derive(Debug, Clone, FromRow)]
pub struct HotMediaRow {
    pub id: EntityId,
    pub preview_url: String,
    pub title: Option<String>,
    pub collection_id: EntityId,
    pub collection_title: Option<String>,
    pub collection_slug: String,
    pub collection_image_url: Option<String>,
}

/// Minimal projection used for per-collection listings and sibling samples.
#[derive(Debug, Clone, FromRow)]
pub struct MediaPreviewRow {
    pub id: EntityId,
    pub preview_url: String,
}

/// Detail-page projection: media plus its owning collection's title.
#[derive(Debug, Clone, FromRow)]
pub struct MediaDetailRow {
    pub id: EntityId,
    pub media_url: String,
    pub views: i64,
    pub collection_id: EntityId,
    pub collection_title: Option<String>,
}
