use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use storage::dto::menu::{MenuItemResponse, OrderSuggestion, OrderSuggestionRequest};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/api/menus/restaurant/{restaurant_id}",
    params(
        ("restaurant_id" = Uuid, Path, description = "Restaurant id")
    ),
    responses(
        (status = 200, description = "Menu items for the restaurant", body = Vec<MenuItemResponse>)
    ),
    tag = "menus"
)]
pub async fn get_restaurant_menu(
    State(state): State<AppState>,
    Path(restaurant_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let items = services::get_restaurant_menu(state.db.pool(), restaurant_id).await?;

    Ok(Json(items).into_response())
}

#[utoipa::path(
    post,
    path = "/api/menus/suggest",
    request_body = OrderSuggestionRequest,
    responses(
        (status = 200, description = "Suggested order for the party", body = OrderSuggestion),
        (status = 400, description = "Validation error")
    ),
    tag = "menus"
)]
pub async fn post_suggest(
    State(state): State<AppState>,
    Json(req): Json<OrderSuggestionRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let suggestion = services::generate_suggestion(state.db.pool(), &req).await?;

    Ok(Json(suggestion).into_response())
}
