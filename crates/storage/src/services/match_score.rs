use std::collections::{BTreeMap, HashSet};
use std::hash::Hash;
use std::time::Duration;

use rand::Rng;
use sqlx::PgPool;
use uuid::Uuid;

use crate::cache::TtlCache;
use crate::error::Result;
use crate::models::RatingStatus;
use crate::repository::rating::RatingRepository;
use crate::repository::restaurant::RestaurantRepository;

const RESTAURANT_WEIGHT: f64 = 0.7;
const CUISINE_WEIGHT: f64 = 0.3;
const BASELINE_SCORE: i64 = 30;
const MAX_SCORE: i64 = 99;

pub const MATCH_CACHE_TTL: Duration = Duration::from_secs(300);

/// Symmetric cache key: ids are sorted lexicographically so match(a, b) and
/// match(b, a) hit the same entry.
pub fn match_cache_key(user_id: Uuid, target_id: Uuid) -> String {
    let (a, b) = (user_id.to_string(), target_id.to_string());
    if a <= b {
        format!("match:{a}-{b}")
    } else {
        format!("match:{b}-{a}")
    }
}

pub fn jaccard<T: Eq + Hash>(a: &HashSet<T>, b: &HashSet<T>) -> f64 {
    let union = a.union(b).count();
    if union == 0 {
        return 0.0;
    }
    a.intersection(b).count() as f64 / union as f64
}

/// Truncate and clamp the weighted similarity into the advertised [30, 99]
/// range. The jitter must be drawn once per computation, never per argument
/// order, or symmetry breaks.
fn combine_score(restaurant_similarity: f64, cuisine_similarity: f64, jitter: i64) -> i64 {
    let raw = (restaurant_similarity * RESTAURANT_WEIGHT + cuisine_similarity * CUISINE_WEIGHT)
        * 100.0;
    ((raw + jitter as f64) as i64).clamp(BASELINE_SCORE, MAX_SCORE)
}

/// Taste compatibility between two users, cached for five minutes.
///
/// The baseline branch (either user has no rated restaurants) is recomputed
/// on every call rather than cached, so new users see a real score as soon as
/// their first ratings land.
pub async fn calculate_match(
    pool: &PgPool,
    cache: &TtlCache<i64>,
    rng: &mut impl Rng,
    user_id: Uuid,
    target_id: Uuid,
) -> Result<i64> {
    let cache_key = match_cache_key(user_id, target_id);
    if let Some(score) = cache.get(&cache_key) {
        return Ok(score);
    }

    let ratings = RatingRepository::new(pool);
    let statuses = [RatingStatus::Been, RatingStatus::WantToTry];
    let user_restaurants: HashSet<Uuid> = ratings
        .restaurant_ids_with_status(user_id, &statuses)
        .await?
        .into_iter()
        .collect();
    let target_restaurants: HashSet<Uuid> = ratings
        .restaurant_ids_with_status(target_id, &statuses)
        .await?
        .into_iter()
        .collect();

    if user_restaurants.is_empty() || target_restaurants.is_empty() {
        return Ok(BASELINE_SCORE);
    }

    let restaurant_similarity = jaccard(&user_restaurants, &target_restaurants);

    // Cuisine sets over the union, attributed to whichever side rated them.
    let union_ids: Vec<Uuid> = user_restaurants.union(&target_restaurants).copied().collect();
    let restaurants = RestaurantRepository::new(pool).find_by_ids(&union_ids).await?;

    let mut user_cuisines: HashSet<String> = HashSet::new();
    let mut target_cuisines: HashSet<String> = HashSet::new();
    for restaurant in &restaurants {
        if user_restaurants.contains(&restaurant.id) {
            user_cuisines.extend(restaurant.cuisine.iter().cloned());
        }
        if target_restaurants.contains(&restaurant.id) {
            target_cuisines.extend(restaurant.cuisine.iter().cloned());
        }
    }
    let cuisine_similarity = jaccard(&user_cuisines, &target_cuisines);

    let jitter: i64 = rng.gen_range(-3..=3);
    let score = combine_score(restaurant_similarity, cuisine_similarity, jitter);

    cache.set(&cache_key, score, MATCH_CACHE_TTL);
    Ok(score)
}

/// Per-pair scores for one base user against many targets. Each pair is
/// computed independently; cached pairs are reused.
pub async fn calculate_batch(
    pool: &PgPool,
    cache: &TtlCache<i64>,
    rng: &mut impl Rng,
    user_id: Uuid,
    target_ids: &[Uuid],
) -> Result<BTreeMap<Uuid, i64>> {
    let mut matches = BTreeMap::new();
    for &target_id in target_ids {
        let score = calculate_match(pool, cache, rng, user_id, target_id).await?;
        matches.insert(target_id, score);
    }
    Ok(matches)
}
