use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::Restaurant;

use super::decimal_to_f64;

fn default_limit() -> usize {
    20
}

/// Request payload for group dinner suggestions. An empty participant list
/// means a solo dinner; the organizer always counts as a participant.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GroupDinnerRequest {
    pub user_id: Uuid,

    #[serde(default)]
    pub participant_ids: Vec<Uuid>,

    #[serde(default)]
    pub category: Option<String>,

    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = 100, message = "limit must be between 1 and 100"))]
    pub limit: usize,
}

/// One scored restaurant suggestion.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GroupDinnerMatch {
    pub restaurant: RestaurantSummary,
    pub score: i64,
    pub on_lists_count: i64,
    /// Participants who have this restaurant on a want-to-try list.
    pub participants: Vec<Uuid>,
    pub match_reasons: Vec<String>,
    /// Always null in suggestion results; populated only by the dedicated
    /// availability endpoint.
    pub availability: Option<AvailabilityInfo>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantSummary {
    pub id: Uuid,
    pub name: String,
    pub cuisine: Vec<String>,
    pub category: String,
    pub price_range: String,
    pub city: Option<String>,
    pub state: Option<String>,
    pub rating: Option<f64>,
    pub rating_count: i32,
}

impl From<Restaurant> for RestaurantSummary {
    fn from(restaurant: Restaurant) -> Self {
        Self {
            id: restaurant.id,
            name: restaurant.name,
            cuisine: restaurant.cuisine,
            category: restaurant.category,
            price_range: restaurant.price_range,
            city: restaurant.city,
            state: restaurant.state,
            rating: restaurant.rating.map(decimal_to_f64),
            rating_count: restaurant.rating_count,
        }
    }
}

/// Mock reservation availability, pending a real reservation system.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityInfo {
    pub available: bool,
    pub time_slots: Vec<String>,
}
