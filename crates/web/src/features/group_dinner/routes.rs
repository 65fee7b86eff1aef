use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::handlers::{get_availability, get_companions, get_friends, post_suggestions};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/suggestions", post(post_suggestions))
        .route("/friends/:user_id", get(get_friends))
        .route("/companions/:user_id", get(get_companions))
        .route("/availability/:restaurant_id", get(get_availability))
}
