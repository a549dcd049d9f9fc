//! Client-facing view models and the pure mappings that build them.
//!
//! This layer renames fields to the wire's camelCase, nests collection
//! summaries inside media records, defaults missing titles to "Untitled",
//! and constructs short display ids for every media identifier the client
//! turns into a `/api/media/{id}` link. A row missing a required
//! identifier is dropped with a warning instead of failing the page.

use galleria_core::shortid;
use galleria_core::types::EntityId;
use serde::Serialize;

use galleria_db::models::collection::{
    CollectionProfile, CollectionSearchRow, RankedCollection, TopCollection,
};
use galleria_db::models::media::{HotMediaRow, MediaDetailRow, MediaPreviewRow};

const UNTITLED: &str = "Untitled";

fn title_or_default(title: Option<String>) -> String {
    title.unwrap_or_else(|| UNTITLED.to_string())
}

// ---------------------------------------------------------------------------
// Feed views
// ---------------------------------------------------------------------------

/// Owning-collection summary nested inside feed items.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionSummary {
    pub id: EntityId,
    pub title: String,
    pub slug: String,
    pub image_url: Option<String>,
}

/// One hot-feed entry.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedItem {
    /// Short display id for the media detail link.
    pub id: String,
    pub preview_url: String,
    pub title: Option<String>,
    pub collection: CollectionSummary,
}

/// `{media, nextCursor}` envelope for the hot and ai-images feeds and the
/// per-collection media listing.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedPage {
    pub media: Vec<FeedItem>,
    pub next_cursor: Option<i64>,
}

pub fn feed_item(row: HotMediaRow) -> FeedItem {
    FeedItem {
        id: shortid::encode(row.id),
        preview_url: row.preview_url,
        title: row.title,
        collection: CollectionSummary {
            id: row.collection_id,
            title: title_or_default(row.collection_title),
            slug: row.collection_slug,
            image_url: row.collection_image_url,
        },
    }
}

// ---------------------------------------------------------------------------
// Collection views
// ---------------------------------------------------------------------------

/// Short-id media link used in listings and the detail page strip.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaLink {
    pub id: String,
    pub preview_url: String,
}

pub fn media_link(row: MediaPreviewRow) -> MediaLink {
    MediaLink {
        id: shortid::encode(row.id),
        preview_url: row.preview_url,
    }
}

/// `{media, nextCursor}` envelope for the per-collection media listing.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaLinkPage {
    pub media: Vec<MediaLink>,
    pub next_cursor: Option<i64>,
}

/// One ranked-collection card with its most-viewed media annotation.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionCard {
    pub id: EntityId,
    pub title: String,
    pub slug: String,
    pub image_url: Option<String>,
    pub views: i64,
    pub most_viewed_media: Option<MediaLink>,
}

/// `{collections, nextCursor, hasMore}` envelope for `/api/collections`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionListPage {
    pub collections: Vec<CollectionCard>,
    pub next_cursor: Option<i64>,
    pub has_more: bool,
}

pub fn collection_card(row: RankedCollection) -> CollectionCard {
    let most_viewed_media = match (row.most_viewed_media_id, row.most_viewed_preview_url) {
        (Some(id), Some(preview_url)) => Some(MediaLink {
            id: shortid::encode(id),
            preview_url,
        }),
        (None, None) => None,
        _ => {
            tracing::warn!(
                collection = %row.id,
                "Ranked row has a half-null most-viewed annotation, dropping it"
            );
            None
        }
    };

    CollectionCard {
        id: row.id,
        title: title_or_default(row.title),
        slug: row.slug,
        image_url: row.image_url,
        views: row.views,
        most_viewed_media,
    }
}

/// One `/api/top-groups` entry.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopCollectionView {
    pub id: EntityId,
    pub title: String,
    pub image_url: Option<String>,
    pub slug: String,
}

pub fn top_collection(row: TopCollection) -> TopCollectionView {
    TopCollectionView {
        id: row.id,
        title: title_or_default(row.title),
        image_url: row.image_url,
        slug: row.slug,
    }
}

/// Profile page view with merged (durable + pending) views.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionProfileView {
    pub id: EntityId,
    pub title: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub views: i64,
    pub total_items: i32,
}

pub fn collection_profile(row: CollectionProfile, merged_views: i64) -> CollectionProfileView {
    CollectionProfileView {
        id: row.id,
        title: title_or_default(row.title),
        description: row.description,
        image_url: row.image_url,
        views: merged_views,
        total_items: row.total_items,
    }
}

// ---------------------------------------------------------------------------
// Media detail views
// ---------------------------------------------------------------------------

/// Detail page view: the media item, merged views, and a random sibling
/// sample for the "additional media" strip.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaDetailView {
    pub id: String,
    pub media_url: String,
    pub views: i64,
    pub collection_id: EntityId,
    pub collection_title: String,
    pub additional_media: Vec<MediaLink>,
}

pub fn media_detail(
    row: MediaDetailRow,
    merged_views: i64,
    siblings: Vec<MediaPreviewRow>,
) -> MediaDetailView {
    MediaDetailView {
        id: shortid::encode(row.id),
        media_url: row.media_url,
        views: merged_views,
        collection_id: row.collection_id,
        collection_title: title_or_default(row.collection_title),
        additional_media: siblings.into_iter().map(media_link).collect(),
    }
}

// ---------------------------------------------------------------------------
// Search views
// ---------------------------------------------------------------------------

/// One search hit; the id is short-encoded for link construction.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub image_url: Option<String>,
    pub views: i64,
}

/// `{collections}` envelope for `/api/search`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResults {
    pub collections: Vec<SearchResult>,
}

pub fn search_result(row: CollectionSearchRow) -> SearchResult {
    SearchResult {
        id: shortid::encode(row.id),
        title: title_or_default(row.title),
        slug: row.slug,
        image_url: row.image_url,
        views: row.views,
    }
}
