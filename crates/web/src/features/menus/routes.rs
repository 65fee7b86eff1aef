use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::handlers::{get_restaurant_menu, post_suggest};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/restaurant/:restaurant_id", get(get_restaurant_menu))
        .route("/suggest", post(post_suggest))
}
