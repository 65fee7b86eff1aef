use std::collections::BTreeMap;

use rand::Rng;
use sqlx::PgPool;
use storage::{
    cache::TtlCache,
    dto::taste::TasteProfile,
    error::Result,
    services::{match_score, taste_profile},
};
use uuid::Uuid;

/// Taste compatibility between two users.
pub async fn calculate_match(
    pool: &PgPool,
    cache: &TtlCache<i64>,
    rng: &mut impl Rng,
    user_id: Uuid,
    target_id: Uuid,
) -> Result<i64> {
    match_score::calculate_match(pool, cache, rng, user_id, target_id).await
}

/// Per-target compatibility scores for one base user.
pub async fn calculate_batch(
    pool: &PgPool,
    cache: &TtlCache<i64>,
    rng: &mut impl Rng,
    user_id: Uuid,
    target_ids: &[Uuid],
) -> Result<BTreeMap<Uuid, i64>> {
    match_score::calculate_batch(pool, cache, rng, user_id, target_ids).await
}

/// Aggregated dining profile for a user.
pub async fn get_taste_profile(
    pool: &PgPool,
    cache: &TtlCache<TasteProfile>,
    user_id: Uuid,
) -> Result<TasteProfile> {
    taste_profile::get_taste_profile(pool, cache, user_id).await
}
