use axum::{
    Router,
    routing::{get, post, put},
};
use std::sync::Arc;

use crate::api::handlers::{
    AppState, get_export, get_matches, get_standings, post_import, post_reset, put_frame_score,
    put_high_break,
};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/matches", get(get_matches))
        .route("/api/matches/:match_index/frames/:frame_index", put(put_frame_score))
        .route("/api/matches/:match_index/high-break", put(put_high_break))
        .route("/api/standings", get(get_standings))
        .route("/api/reset", post(post_reset))
        .route("/api/export", get(get_export))
        .route("/api/import", post(post_import))
        .with_state(state)
}
