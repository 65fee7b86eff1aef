use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use storage::{
    dto::{
        group_dinner::{AvailabilityInfo, GroupDinnerMatch, GroupDinnerRequest},
        user::UserSummary,
    },
    services::group_dinner,
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    post,
    path = "/api/group-dinner/suggestions",
    request_body = GroupDinnerRequest,
    responses(
        (status = 200, description = "Ranked restaurant suggestions for the group", body = Vec<GroupDinnerMatch>),
        (status = 400, description = "Validation error")
    ),
    tag = "group-dinner"
)]
pub async fn post_suggestions(
    State(state): State<AppState>,
    Json(req): Json<GroupDinnerRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let matches = group_dinner::get_suggestions(state.db.pool(), &req).await?;

    Ok(Json(matches).into_response())
}

#[utoipa::path(
    get,
    path = "/api/group-dinner/friends/{user_id}",
    params(
        ("user_id" = Uuid, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "Users the given user follows", body = Vec<UserSummary>)
    ),
    tag = "group-dinner"
)]
pub async fn get_friends(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let friends = services::get_friends(state.db.pool(), user_id).await?;

    Ok(Json(friends).into_response())
}

#[utoipa::path(
    get,
    path = "/api/group-dinner/companions/{user_id}",
    params(
        ("user_id" = Uuid, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "Recent dining companions", body = Vec<UserSummary>)
    ),
    tag = "group-dinner"
)]
pub async fn get_companions(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let companions = services::get_recent_companions(state.db.pool(), user_id).await?;

    Ok(Json(companions).into_response())
}

#[utoipa::path(
    get,
    path = "/api/group-dinner/availability/{restaurant_id}",
    params(
        ("restaurant_id" = Uuid, Path, description = "Restaurant id")
    ),
    responses(
        (status = 200, description = "Reservation availability (mock)", body = AvailabilityInfo)
    ),
    tag = "group-dinner"
)]
pub async fn get_availability(
    State(_state): State<AppState>,
    Path(_restaurant_id): Path<Uuid>,
) -> Result<Response, WebError> {
    Ok(Json(group_dinner::restaurant_availability()).into_response())
}
