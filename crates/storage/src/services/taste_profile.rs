use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

use sqlx::PgPool;
use uuid::Uuid;

use crate::cache::TtlCache;
use crate::dto::decimal_to_f64;
use crate::dto::taste::{CuisineCount, TasteProfile};
use crate::error::Result;
use crate::models::RatedVisit;
use crate::repository::rating::RatingRepository;

pub const TASTE_CACHE_TTL: Duration = Duration::from_secs(600);

const TOP_CUISINE_LIMIT: usize = 5;
const NO_DATA_INSIGHT: &str =
    "Not enough data yet. Rate more restaurants to see your taste profile!";

/// Counter that remembers first-encounter order so `most_common` ties break
/// the same way on every run.
#[derive(Default)]
struct FrequencyCounter {
    order: Vec<String>,
    counts: HashMap<String, i64>,
}

impl FrequencyCounter {
    fn add(&mut self, key: &str) {
        match self.counts.get_mut(key) {
            Some(count) => *count += 1,
            None => {
                self.order.push(key.to_string());
                self.counts.insert(key.to_string(), 1);
            }
        }
    }

    fn most_common(&self, limit: usize) -> Vec<(String, i64)> {
        let mut pairs: Vec<(String, i64)> = self
            .order
            .iter()
            .map(|key| (key.clone(), self.counts[key]))
            .collect();
        pairs.sort_by(|a, b| b.1.cmp(&a.1));
        pairs.truncate(limit);
        pairs
    }

    fn unique(&self) -> usize {
        self.order.len()
    }
}

/// Aggregate a user's `been` ratings into a taste profile, cached for ten
/// minutes. The "not enough data" response is never cached.
pub async fn get_taste_profile(
    pool: &PgPool,
    cache: &TtlCache<TasteProfile>,
    user_id: Uuid,
) -> Result<TasteProfile> {
    let cache_key = format!("taste_profile:{user_id}");
    if let Some(profile) = cache.get(&cache_key) {
        return Ok(profile);
    }

    let visits = RatingRepository::new(pool).rated_visits(user_id).await?;
    let profile = analyze(&visits);

    if profile.total_rated > 0 {
        cache.set(&cache_key, profile.clone(), TASTE_CACHE_TTL);
    }
    Ok(profile)
}

pub fn analyze(visits: &[RatedVisit]) -> TasteProfile {
    if visits.is_empty() {
        return TasteProfile {
            top_cuisines: Vec::new(),
            price_preference: None,
            average_rating: None,
            rating_distribution: BTreeMap::new(),
            total_rated: 0,
            adventurousness_score: 0,
            insights: vec![NO_DATA_INSIGHT.to_string()],
        };
    }

    let mut cuisines = FrequencyCounter::default();
    let mut prices = FrequencyCounter::default();
    let mut scores: Vec<f64> = Vec::new();
    let mut distribution: BTreeMap<String, i64> = BTreeMap::new();

    for visit in visits {
        for cuisine in &visit.cuisine {
            cuisines.add(cuisine);
        }
        if !visit.price_range.is_empty() {
            prices.add(&visit.price_range);
        }
        match visit.rating {
            Some(rating) => {
                let score = decimal_to_f64(rating);
                scores.push(score);
                *distribution.entry((score as i64).to_string()).or_insert(0) += 1;
            }
            None => {
                *distribution.entry("unrated".to_string()).or_insert(0) += 1;
            }
        }
    }

    let top_cuisines: Vec<CuisineCount> = cuisines
        .most_common(TOP_CUISINE_LIMIT)
        .into_iter()
        .map(|(cuisine, count)| CuisineCount { cuisine, count })
        .collect();

    let price_preference = prices.most_common(1).into_iter().next().map(|(p, _)| p);

    let average_rating = if scores.is_empty() {
        None
    } else {
        let mean = scores.iter().sum::<f64>() / scores.len() as f64;
        Some((mean * 10.0).round() / 10.0)
    };

    let total_rated = visits.len() as i64;
    let adventurousness_score = adventurousness(cuisines.unique(), visits.len());

    let insights = generate_insights(
        &top_cuisines,
        price_preference.as_deref(),
        average_rating,
        adventurousness_score,
        total_rated,
    );

    TasteProfile {
        top_cuisines,
        price_preference,
        average_rating,
        rating_distribution: distribution,
        total_rated,
        adventurousness_score,
        insights,
    }
}

/// Cuisine variety relative to volume, scaled x3 and capped at 100.
fn adventurousness(unique_cuisines: usize, total_rated: usize) -> i64 {
    let ratio = unique_cuisines as f64 / total_rated.max(1) as f64;
    ((ratio * 100.0 * 3.0).round() as i64).min(100)
}

fn price_label(price_range: &str) -> &'static str {
    match price_range {
        "$" => "budget-friendly",
        "$$" => "moderate",
        "$$$" => "upscale",
        "$$$$" => "fine dining",
        _ => "varied",
    }
}

fn generate_insights(
    top_cuisines: &[CuisineCount],
    price_preference: Option<&str>,
    average_rating: Option<f64>,
    adventurousness_score: i64,
    total_rated: i64,
) -> Vec<String> {
    let mut insights = Vec::new();

    if let Some(favorite) = top_cuisines.first() {
        insights.push(format!("Your top cuisine is {}", favorite.cuisine));
    }

    if let Some(price) = price_preference {
        insights.push(format!(
            "You tend to prefer {} restaurants",
            price_label(price)
        ));
    }

    if let Some(average) = average_rating {
        if average >= 8.0 {
            insights.push("You're a selective diner - you know what you like!".to_string());
        } else if average >= 6.0 {
            insights.push("You have a balanced palate with varied tastes".to_string());
        } else {
            insights
                .push("You're an honest critic who isn't afraid to give low scores".to_string());
        }
    }

    if adventurousness_score >= 70 {
        insights.push("You're a culinary adventurer who loves trying new cuisines!".to_string());
    } else if adventurousness_score >= 40 {
        insights.push("You balance favorites with new discoveries".to_string());
    }

    if total_rated >= 50 {
        insights.push(format!(
            "With {total_rated} restaurants rated, you're a seasoned foodie!"
        ));
    }

    insights
}
