//! Handlers for the collection resources.

use axum::extract::{Path, Query, State};
use axum::Json;
use galleria_core::error::CoreError;
use galleria_core::pagination::{clamp_cursor, page_from_overfetch, PAGE_LIMIT};
use galleria_core::types::EntityKind;
use galleria_db::models::collection::CollectionTitle;
use galleria_db::repositories::{CollectionRepo, MediaRepo};

use crate::error::{AppError, AppResult};
use crate::query::CursorParams;
use crate::state::AppState;
use crate::views::{self, CollectionListPage, CollectionProfileView, MediaLinkPage, TopCollectionView};

/// GET /api/collections
///
/// Collections ranked by durable views, each with its most-viewed media
/// annotation.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<CursorParams>,
) -> AppResult<Json<CollectionListPage>> {
    let cursor = clamp_cursor(params.cursor);
    let rows = CollectionRepo::list_ranked(&state.pool, PAGE_LIMIT + 1, cursor).await?;
    let page = page_from_overfetch(rows, cursor, PAGE_LIMIT);

    Ok(Json(CollectionListPage {
        collections: page.items.into_iter().map(views::collection_card).collect(),
        has_more: page.next_cursor.is_some(),
        next_cursor: page.next_cursor,
    }))
}

/// GET /api/top-groups
///
/// Bare array of the top collections by durable views.
pub async fn top_groups(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<TopCollectionView>>> {
    let rows = CollectionRepo::top_by_views(&state.pool, PAGE_LIMIT).await?;
    Ok(Json(rows.into_iter().map(views::top_collection).collect()))
}

/// GET /api/collection/{slug}/profile
///
/// Exact slug lookup. The read counts as one view: the pending buffer is
/// incremented and the response carries durable + pending views.
pub async fn profile(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<CollectionProfileView>> {
    let profile = CollectionRepo::find_by_slug(&state.pool, &slug)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Collection",
        }))?;

    state
        .view_counter
        .increment(EntityKind::Collection, profile.id);
    let merged_views =
        state
            .view_counter
            .read_total(EntityKind::Collection, profile.id, profile.views);

    Ok(Json(views::collection_profile(profile, merged_views)))
}

/// GET /api/collection/{slug}/media
///
/// Media previews for one collection, newest first (deterministic, unlike
/// the sampled feeds).
pub async fn media(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(params): Query<CursorParams>,
) -> AppResult<Json<MediaLinkPage>> {
    let collection_id = CollectionRepo::find_id_by_slug(&state.pool, &slug)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Collection",
        }))?;

    let cursor = clamp_cursor(params.cursor);
    let rows =
        MediaRepo::list_by_collection(&state.pool, collection_id, PAGE_LIMIT + 1, cursor).await?;
    let page = page_from_overfetch(rows, cursor, PAGE_LIMIT);

    Ok(Json(MediaLinkPage {
        media: page.items.into_iter().map(views::media_link).collect(),
        next_cursor: page.next_cursor,
    }))
}

/// GET /api/collection-names
///
/// All collection titles, consumed by the client-side search index.
pub async fn names(State(state): State<AppState>) -> AppResult<Json<Vec<CollectionTitle>>> {
    let titles = CollectionRepo::list_titles(&state.pool).await?;
    Ok(Json(titles))
}
