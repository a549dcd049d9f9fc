//! Handler for the media detail page.

use axum::extract::{Path, State};
use axum::Json;
use galleria_core::error::CoreError;
use galleria_core::pagination::RELATED_LIMIT;
use galleria_core::shortid;
use galleria_core::types::EntityKind;
use galleria_db::repositories::MediaRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;
use crate::views::{self, MediaDetailView};

/// GET /api/media/{id}
///
/// The path parameter is a short display id. Malformed display ids decode
/// to an error and are answered as not-found; the store is never queried
/// with data derived from malformed input. The read counts as one view.
pub async fn detail(
    State(state): State<AppState>,
    Path(display_id): Path<String>,
) -> AppResult<Json<MediaDetailView>> {
    let id = shortid::decode(&display_id)
        .map_err(|_| CoreError::NotFound { entity: "Media" })?;

    let row = MediaRepo::find_detail(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Media" }))?;

    state.view_counter.increment(EntityKind::Media, row.id);
    let merged_views = state
        .view_counter
        .read_total(EntityKind::Media, row.id, row.views);

    let siblings =
        MediaRepo::sample_siblings(&state.pool, row.collection_id, RELATED_LIMIT).await?;

    Ok(Json(views::media_detail(row, merged_views, siblings)))
}
