//! Repository for the `media` table.

use galleria_core::types::EntityId;
use sqlx::PgPool;

use crate::models::collection::ProductionType;
use crate::models::media::{
    CreateMedia, HotMediaRow, Media, MediaDetailRow, MediaPreviewRow,
};

/// Column list shared across full-row queries to avoid repetition.
const COLUMNS: &str = "id, collection_id, title, description, media_type, media_url, \
     preview_url, file_hash, views, likes, duration_secs, width, height, tags, \
     created_at, updated_at";

/// Read-side queries for media plus the flush mutation.
pub struct MediaRepo;

impl MediaRepo {
    /// Insert a new media item, returning the created row.
    ///
    /// Ingestion happens out-of-band of the API; this exists for tooling
    /// and tests. `tags` defaults to `[]`.
    pub async fn create(pool: &PgPool, input: &CreateMedia) -> Result<Media, sqlx::Error> {
        let query = format!(
            "INSERT INTO media
                (collection_id, title, description, media_type, media_url, preview_url,
                 file_hash, duration_secs, width, height, tags)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, COALESCE($11, '[]'::jsonb))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Media>(&query)
            .bind(input.collection_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.media_type)
            .bind(&input.media_url)
            .bind(&input.preview_url)
            .bind(&input.file_hash)
            .bind(input.duration_secs)
            .bind(input.width)
            .bind(input.height)
            .bind(&input.tags)
            .fetch_one(pool)
            .await
    }

    /// Random sample of media joined with owning collection summaries,
    /// optionally restricted to collections of one production type.
    ///
    /// `ORDER BY random()` reshuffles on every call, so repeated fetches at
    /// the same offset are not idempotent. Accepted for a discovery feed;
    /// the response cache keeps a page stable within its TTL. Full-table
    /// random ordering is O(N log N) and a known scaling hazard at much
    /// larger row counts. Callers pass `fetch = limit + 1`.
    pub async fn list_hot(
        pool: &PgPool,
        production_type: Option<ProductionType>,
        fetch: i64,
        offset: i64,
    ) -> Result<Vec<HotMediaRow>, sqlx::Error> {
        sqlx::query_as::<_, HotMediaRow>(
            "SELECT m.id, m.preview_url, m.title,
                    c.id AS collection_id, c.title AS collection_title,
                    c.slug AS collection_slug, c.image_url AS collection_image_url
             FROM media m
             INNER JOIN collections c ON c.id = m.collection_id
             WHERE $1::production_type IS NULL OR c.production_type = $1
             ORDER BY random()
             LIMIT $2 OFFSET $3",
        )
        .bind(production_type)
        .bind(fetch)
        .bind(offset)
        .fetch_all(pool)
        .await
    }

    /// Media previews for one collection, newest first.
    ///
    /// Deterministic ordering (unlike the sampled feeds): creation time
    /// descending, id descending as the stable tie-break. Callers pass
    /// `fetch = limit + 1`.
    pub async fn list_by_collection(
        pool: &PgPool,
        collection_id: EntityId,
        fetch: i64,
        offset: i64,
    ) -> Result<Vec<MediaPreviewRow>, sqlx::Error> {
        sqlx::query_as::<_, MediaPreviewRow>(
            "SELECT id, preview_url
             FROM media
             WHERE collection_id = $1
             ORDER BY created_at DESC, id DESC
             LIMIT $2 OFFSET $3",
        )
        .bind(collection_id)
        .bind(fetch)
        .bind(offset)
        .fetch_all(pool)
        .await
    }

    /// Detail lookup: media plus the owning collection's title.
    pub async fn find_detail(
        pool: &PgPool,
        id: EntityId,
    ) -> Result<Option<MediaDetailRow>, sqlx::Error> {
        sqlx::query_as::<_, MediaDetailRow>(
            "SELECT m.id, m.media_url, m.views, m.collection_id,
                    c.title AS collection_title
             FROM media m
             INNER JOIN collections c ON c.id = m.collection_id
             WHERE m.id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Random sample of media from one collection for the detail page's
    /// "additional media" strip. Includes the item itself.
    pub async fn sample_siblings(
        pool: &PgPool,
        collection_id: EntityId,
        limit: i64,
    ) -> Result<Vec<MediaPreviewRow>, sqlx::Error> {
        sqlx::query_as::<_, MediaPreviewRow>(
            "SELECT id, preview_url
             FROM media
             WHERE collection_id = $1
             ORDER BY random()
             LIMIT $2",
        )
        .bind(collection_id)
        .bind(limit)
        .fetch_all(pool)
        .await
    }

    /// Add a flushed pending amount to the durable counter.
    ///
    /// Returns `false` when the row no longer exists.
    pub async fn add_views(
        pool: &PgPool,
        id: EntityId,
        amount: i64,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE media SET views = views + $2 WHERE id = $1")
            .bind(id)
            .bind(amount)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
