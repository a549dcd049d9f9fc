//! Collection entity model, enums, DTOs, and read projections.

use galleria_core::types::{EntityId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Audience rating of a collection's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "content_rating", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ContentRating {
    Soft,
    Mature,
}

/// Whether a collection holds captured or generated content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "production_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ProductionType {
    Real,
    Ai,
}

/// A row from the `collections` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Collection {
    pub id: EntityId,
    /// Immutable, globally unique, URL-safe.
    pub slug: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    /// Durable counter; only mutated by the view-count flush.
    pub views: i64,
    pub total_items: i32,
    pub content_rating: ContentRating,
    pub production_type: ProductionType,
    pub is_public: bool,
    pub is_premium: bool,
    /// NOT NULL in the database; defaults to `{}`.
    pub social_links: serde_json::Value,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new collection.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCollection {
    pub slug: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub total_items: Option<i32>,
    /// Defaults to `soft` if omitted.
    pub content_rating: Option<ContentRating>,
    pub production_type: ProductionType,
    pub is_public: Option<bool>,
    pub is_premium: Option<bool>,
    pub social_links: Option<serde_json::Value>,
}

/// Profile projection served by `/api/collection/{slug}/profile`.
#[derive(Debug, Clone, FromRow)]
pub struct CollectionProfile {
    pub id: EntityId,
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub views: i64,
    pub total_items: i32,
}

/// A collection ranked by durable views, annotated with its single
/// most-viewed media item (both columns null for empty collections).
#[derive(Debug, Clone, FromRow)]
pub struct RankedCollection {
    pub id: EntityId,
    pub title: Option<String>,
    pub slug: String,
    pub image_url: Option<String>,
    pub views: i64,
    pub most_viewed_media_id: Option<EntityId>,
    pub most_viewed_preview_url: Option<String>,
}

/// Summary projection for `/api/top-groups`.
#[derive(Debug, Clone, FromRow)]
pub struct TopCollection {
    pub id: EntityId,
    pub title: Option<String>,
    pub image_url: Option<String>,
    pub slug: String,
}

/// Search projection for `/api/search`.
#[derive(Debug, Clone, FromRow)]
pub struct CollectionSearchRow {
    pub id: EntityId,
    pub title: Option<String>,
    pub slug: String,
    pub image_url: Option<String>,
    pub views: i64,
}

/// Bare title row for `/api/collection-names`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CollectionTitle {
    pub title: Option<String>,
}
