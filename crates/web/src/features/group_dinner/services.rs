use std::collections::HashSet;

use sqlx::PgPool;
use storage::{
    dto::user::UserSummary,
    error::Result,
    repository::{rating::RatingRepository, user::UserRepository},
};
use uuid::Uuid;

const COMPANION_VISIT_LOOKBACK: i64 = 20;
const COMPANION_LIMIT: usize = 10;

/// Users the given user follows.
pub async fn get_friends(pool: &PgPool, user_id: Uuid) -> Result<Vec<UserSummary>> {
    let repo = UserRepository::new(pool);
    let friends = repo.following(user_id).await?;
    Ok(friends.into_iter().map(UserSummary::from).collect())
}

/// Distinct companions tagged on the user's most recent visits.
pub async fn get_recent_companions(pool: &PgPool, user_id: Uuid) -> Result<Vec<UserSummary>> {
    let companion_lists = RatingRepository::new(pool)
        .recent_companion_lists(user_id, COMPANION_VISIT_LOOKBACK)
        .await?;

    let mut seen = HashSet::new();
    let mut companion_ids = Vec::new();
    for list in companion_lists {
        for companion_id in list {
            if companion_id != user_id && seen.insert(companion_id) {
                companion_ids.push(companion_id);
            }
        }
    }
    companion_ids.truncate(COMPANION_LIMIT);

    if companion_ids.is_empty() {
        return Ok(Vec::new());
    }

    let companions = UserRepository::new(pool).find_by_ids(&companion_ids).await?;
    Ok(companions.into_iter().map(UserSummary::from).collect())
}
