use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Aggregated dining profile for one user. Cached per user for ten minutes.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TasteProfile {
    /// Up to five most frequent cuisines, ties broken by first encounter.
    pub top_cuisines: Vec<CuisineCount>,
    pub price_preference: Option<String>,
    pub average_rating: Option<f64>,
    /// Counts keyed by integer-truncated score, "unrated" for scoreless visits.
    pub rating_distribution: BTreeMap<String, i64>,
    pub total_rated: i64,
    pub adventurousness_score: i64,
    pub insights: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CuisineCount {
    pub cuisine: String,
    pub count: i64,
}
