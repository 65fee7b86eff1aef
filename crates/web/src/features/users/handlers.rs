use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use rand::{SeedableRng, rngs::StdRng};
use storage::dto::{
    matching::{BatchMatchRequest, BatchMatchResponse, MatchResponse},
    taste::TasteProfile,
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/api/users/{id}/match/{target_id}",
    params(
        ("id" = Uuid, Path, description = "Base user id"),
        ("target_id" = Uuid, Path, description = "Target user id")
    ),
    responses(
        (status = 200, description = "Match percentage between the two users", body = MatchResponse)
    ),
    tag = "users"
)]
pub async fn get_match(
    State(state): State<AppState>,
    Path((id, target_id)): Path<(Uuid, Uuid)>,
) -> Result<Response, WebError> {
    // The RNG lives across the await below, so it must be Send; ThreadRng
    // is not and would break the Handler bound.
    let mut rng = StdRng::from_entropy();
    let match_percentage =
        services::calculate_match(state.db.pool(), &state.match_cache, &mut rng, id, target_id)
            .await?;

    Ok(Json(MatchResponse { match_percentage }).into_response())
}

#[utoipa::path(
    post,
    path = "/api/users/{id}/match/batch",
    params(
        ("id" = Uuid, Path, description = "Base user id")
    ),
    request_body = BatchMatchRequest,
    responses(
        (status = 200, description = "Match percentages per target user", body = BatchMatchResponse),
        (status = 400, description = "Validation error")
    ),
    tag = "users"
)]
pub async fn post_batch_match(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<BatchMatchRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let mut rng = StdRng::from_entropy();
    let matches = services::calculate_batch(
        state.db.pool(),
        &state.match_cache,
        &mut rng,
        id,
        &req.target_ids,
    )
    .await?;

    Ok(Json(BatchMatchResponse { matches }).into_response())
}

#[utoipa::path(
    get,
    path = "/api/users/{id}/taste-profile",
    params(
        ("id" = Uuid, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "Aggregated taste profile", body = TasteProfile)
    ),
    tag = "users"
)]
pub async fn get_taste_profile(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let profile = services::get_taste_profile(state.db.pool(), &state.taste_cache, id).await?;

    Ok(Json(profile).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use storage::Database;

    fn assert_send<T: Send>(_: &T) {}

    // axum requires handler futures to be Send. This fails to compile if a
    // handler ever holds a non-Send value (e.g. a ThreadRng) across an await.
    #[tokio::test]
    async fn test_match_handler_futures_are_send() {
        let db = Database::connect_lazy("postgres://localhost/plateful").unwrap();
        let state = AppState::new(db);

        let fut = get_match(
            State(state.clone()),
            Path((Uuid::new_v4(), Uuid::new_v4())),
        );
        assert_send(&fut);

        let fut = post_batch_match(
            State(state),
            Path(Uuid::new_v4()),
            Json(BatchMatchRequest {
                target_ids: vec![Uuid::new_v4()],
            }),
        );
        assert_send(&fut);
    }
}
