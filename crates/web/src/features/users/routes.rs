use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::handlers::{get_match, get_taste_profile, post_batch_match};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/:id/match/:target_id", get(get_match))
        .route("/:id/match/batch", post(post_batch_match))
        .route("/:id/taste-profile", get(get_taste_profile))
}
