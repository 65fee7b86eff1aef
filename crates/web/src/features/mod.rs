use axum::Router;

use crate::state::AppState;

pub mod group_dinner;
pub mod menus;
pub mod users;

pub fn router() -> Router<AppState> {
    Router::new()
        .nest("/api/group-dinner", group_dinner::routes::routes())
        .nest("/api/users", users::routes::routes())
        .nest("/api/menus", menus::routes::routes())
}
