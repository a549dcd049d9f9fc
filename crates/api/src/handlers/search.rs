//! Handler for collection search.

use axum::extract::State;
use axum::Json;
use galleria_core::pagination::{escape_like, SEARCH_LIMIT};
use galleria_db::repositories::CollectionRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::state::AppState;
use crate::views::{self, SearchResults};

/// POST /api/search request body.
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub query: Option<String>,
}

/// POST /api/search
///
/// Case-insensitive substring match on collection titles, capped at 20
/// results. A missing query is a bad request; an empty or whitespace-only
/// query returns an empty list without attempting a match (the UI shows
/// its own prompt for that case). A query with no matches also returns an
/// empty list, with no error field.
pub async fn search(
    State(state): State<AppState>,
    AppJson(input): AppJson<SearchRequest>,
) -> AppResult<Json<SearchResults>> {
    let Some(query) = input.query else {
        return Err(AppError::BadRequest("Search query is required".to_string()));
    };

    if query.trim().is_empty() {
        return Ok(Json(SearchResults {
            collections: Vec::new(),
        }));
    }

    let term = escape_like(&query);
    let rows = CollectionRepo::search_by_title(&state.pool, &term, SEARCH_LIMIT).await?;

    Ok(Json(SearchResults {
        collections: rows.into_iter().map(views::search_result).collect(),
    }))
}
