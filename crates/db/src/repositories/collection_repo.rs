//! Repository for the `collections` table.

use galleria_core::types::EntityId;
use sqlx::PgPool;

use crate::models::collection::{
    Collection, CollectionProfile, CollectionSearchRow, CollectionTitle, CreateCollection,
    RankedCollection, TopCollection,
};

/// Column list shared across full-row queries to avoid repetition.
const COLUMNS: &str = "id, slug, title, description, image_url, views, total_items, \
     content_rating, production_type, is_public, is_premium, social_links, \
     created_at, updated_at";

/// Read-side queries for collections plus the flush mutation.
pub struct CollectionRepo;

impl CollectionRepo {
    /// Insert a new collection, returning the created row.
    ///
    /// Ingestion happens out-of-band of the API; this exists for tooling
    /// and tests. `content_rating` defaults to `soft`, `social_links`
    /// to `{}`.
    pub async fn create(
        pool: &PgPool,
        input: &CreateCollection,
    ) -> Result<Collection, sqlx::Error> {
        let query = format!(
            "INSERT INTO collections
                (slug, title, description, image_url, total_items, content_rating,
                 production_type, is_public, is_premium, social_links)
             VALUES ($1, $2, $3, $4, COALESCE($5, 0), COALESCE($6, 'soft'::content_rating),
                     $7, COALESCE($8, TRUE), COALESCE($9, FALSE), COALESCE($10, '{{}}'::jsonb))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Collection>(&query)
            .bind(&input.slug)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.image_url)
            .bind(input.total_items)
            .bind(input.content_rating)
            .bind(input.production_type)
            .bind(input.is_public)
            .bind(input.is_premium)
            .bind(&input.social_links)
            .fetch_one(pool)
            .await
    }

    /// Exact-match profile lookup by slug.
    pub async fn find_by_slug(
        pool: &PgPool,
        slug: &str,
    ) -> Result<Option<CollectionProfile>, sqlx::Error> {
        sqlx::query_as::<_, CollectionProfile>(
            "SELECT id, title, description, image_url, views, total_items
             FROM collections
             WHERE slug = $1",
        )
        .bind(slug)
        .fetch_optional(pool)
        .await
    }

    /// Resolve a slug to its collection id.
    pub async fn find_id_by_slug(
        pool: &PgPool,
        slug: &str,
    ) -> Result<Option<EntityId>, sqlx::Error> {
        sqlx::query_scalar::<_, EntityId>("SELECT id FROM collections WHERE slug = $1")
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// Collections ordered by durable views descending, each annotated with
    /// its most-viewed media item.
    ///
    /// The annotation is a top-1-per-group window: media partitioned by
    /// collection, ranked by views descending with the lowest media id
    /// winning ties, so the pick never flaps between pages. The outer
    /// ordering tie-breaks on collection id for the same reason. Callers
    /// pass `fetch = limit + 1` for the over-fetch pagination discipline.
    pub async fn list_ranked(
        pool: &PgPool,
        fetch: i64,
        offset: i64,
    ) -> Result<Vec<RankedCollection>, sqlx::Error> {
        sqlx::query_as::<_, RankedCollection>(
            "SELECT c.id, c.title, c.slug, c.image_url, c.views,
                    m.media_id AS most_viewed_media_id,
                    m.preview_url AS most_viewed_preview_url
             FROM collections c
             LEFT JOIN (
                 SELECT media_id, collection_id, preview_url
                 FROM (
                     SELECT id AS media_id, collection_id, preview_url,
                            ROW_NUMBER() OVER (
                                PARTITION BY collection_id
                                ORDER BY views DESC, id ASC
                            ) AS rn
                     FROM media
                 ) ranked
                 WHERE rn = 1
             ) m ON m.collection_id = c.id
             ORDER BY c.views DESC, c.id ASC
             LIMIT $1 OFFSET $2",
        )
        .bind(fetch)
        .bind(offset)
        .fetch_all(pool)
        .await
    }

    /// Top collections by durable views for the `/api/top-groups` strip.
    pub async fn top_by_views(pool: &PgPool, limit: i64) -> Result<Vec<TopCollection>, sqlx::Error> {
        sqlx::query_as::<_, TopCollection>(
            "SELECT id, title, image_url, slug
             FROM collections
             ORDER BY views DESC, id ASC
             LIMIT $1",
        )
        .bind(limit)
        .fetch_all(pool)
        .await
    }

    /// Case-insensitive substring match on title.
    ///
    /// `term` must already be wildcard-escaped (see
    /// `galleria_core::pagination::escape_like`); it is wrapped in `%..%`
    /// here.
    pub async fn search_by_title(
        pool: &PgPool,
        term: &str,
        limit: i64,
    ) -> Result<Vec<CollectionSearchRow>, sqlx::Error> {
        sqlx::query_as::<_, CollectionSearchRow>(
            "SELECT id, title, slug, image_url, views
             FROM collections
             WHERE title ILIKE '%' || $1 || '%'
             ORDER BY views DESC, id ASC
             LIMIT $2",
        )
        .bind(term)
        .bind(limit)
        .fetch_all(pool)
        .await
    }

    /// All collection titles, for the client-side search index.
    pub async fn list_titles(pool: &PgPool) -> Result<Vec<CollectionTitle>, sqlx::Error> {
        sqlx::query_as::<_, CollectionTitle>(
            "SELECT title FROM collections ORDER BY title ASC NULLS LAST",
        )
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
        let result = sqlx::query("UPDATE collections SET views = views + $2 WHERE id = $1")
            .bind(id)
            .bind(amount)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
