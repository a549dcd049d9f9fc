//! Handlers for the discovery feeds (`/api/hot`, `/api/ai-images`).

use axum::extract::{Query, State};
use axum::Json;
use galleria_core::pagination::{clamp_cursor, page_from_overfetch, PAGE_LIMIT};
use galleria_db::models::collection::ProductionType;
use galleria_db::repositories::MediaRepo;

use crate::error::AppResult;
use crate::query::CursorParams;
use crate::state::AppState;
use crate::views::{self, FeedPage};

/// GET /api/hot
///
/// Random media sample across all collections. Repeated fetches at the
/// same cursor reshuffle; the response cache keeps a page stable within
/// its TTL.
pub async fn hot(
    State(state): State<AppState>,
    Query(params): Query<CursorParams>,
) -> AppResult<Json<FeedPage>> {
    feed_page(&state, None, params.cursor).await
}

/// GET /api/ai-images
///
/// The hot feed restricted to generated collections.
pub async fn ai_images(
    State(state): State<AppState>,
    Query(params): Query<CursorParams>,
) -> AppResult<Json<FeedPage>> {
    feed_page(&state, Some(ProductionType::Ai), params.cursor).await
}

async fn feed_page(
    state: &AppState,
    production_type: Option<ProductionType>,
    cursor: Option<i64>,
) -> AppResult<Json<FeedPage>> {
    let cursor = clamp_cursor(cursor);
    let rows =
        MediaRepo::list_hot(&state.pool, production_type, PAGE_LIMIT + 1, cursor).await?;
    let page = page_from_overfetch(rows, cursor, PAGE_LIMIT);

    Ok(Json(FeedPage {
        media: page.items.into_iter().map(views::feed_item).collect(),
        next_cursor: page.next_cursor,
    }))
}
