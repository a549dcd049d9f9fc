pub mod health;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{collections, feed, media, search};
use crate::middleware;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /hot                         random media feed (cached)
/// /ai-images                   random feed, generated collections only (cached)
/// /collections                 ranked collections + most-viewed media (cached)
/// /top-groups                  top collections by views (cached)
/// /collection/{slug}/profile   profile with merged views (cached)
/// /collection/{slug}/media     per-collection media, newest first (cached)
/// /media/{id}                  media detail + sibling sample (cached)
/// /search                      title substring search (POST, not cached)
/// /collection-names            all titles for the client index (not cached)
/// ```
///
/// The response cache wraps only the routes listed as cached; the
/// rate-limit layer wraps the whole tree. The state handle is needed here
/// (not just at `with_state` time) because both middleware layers close
/// over their stores.
pub fn api_routes(state: &AppState) -> Router<AppState> {
    let cached = Router::new()
        .route("/hot", get(feed::hot))
        .route("/ai-images", get(feed::ai_images))
        .route("/collections", get(collections::list))
        .route("/top-groups", get(collections::top_groups))
        .route("/collection/{slug}/profile", get(collections::profile))
        .route("/collection/{slug}/media", get(collections::media))
        .route("/media/{id}", get(media::detail))
        .route_layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::cache::response_cache_layer,
        ));

    Router::new()
        .merge(cached)
        .route("/search", post(search::search))
        .route("/collection-names", get(collections::names))
        .route_layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::rate_limit::rate_limit_layer,
        ))
}
