use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::MenuItem;

use super::decimal_to_f64;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum HungerLevel {
    Light,
    #[default]
    Moderate,
    VeryHungry,
}

/// Descriptive only; menu items are not filtered by meal time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum MealTime {
    Breakfast,
    Lunch,
    #[default]
    Dinner,
    AnyTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderSuggestionRequest {
    pub restaurant_id: Uuid,

    #[validate(range(min = 1, max = 20, message = "partySize must be between 1 and 20"))]
    pub party_size: i32,

    #[serde(default)]
    pub hunger_level: HungerLevel,

    #[serde(default)]
    pub meal_time: MealTime,

    /// e.g. "vegetarian", "gluten-free". Items must carry the matching
    /// dietary tag to pass the filter.
    #[serde(default)]
    pub dietary_restrictions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderSuggestion {
    pub id: Uuid,
    pub restaurant_id: Uuid,
    pub party_size: i32,
    pub hunger_level: HungerLevel,
    pub meal_time: MealTime,
    pub items: Vec<SuggestedItem>,
    pub total_price: f64,
    pub reasoning: Vec<String>,
    pub estimated_sharability: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuggestedItem {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub category: Option<String>,
    pub quantity: u32,
}

/// Menu listing entry for the read-only menu endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemResponse {
    pub id: Uuid,
    pub restaurant_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
    pub is_popular: bool,
    pub dietary_info: Vec<String>,
    pub image_url: Option<String>,
}

impl From<MenuItem> for MenuItemResponse {
    fn from(item: MenuItem) -> Self {
        Self {
            id: item.id,
            restaurant_id: item.restaurant_id,
            name: item.name,
            description: item.description,
            price: item.price.map(decimal_to_f64),
            category: item.category,
            is_popular: item.is_popular,
            dietary_info: item.dietary_info,
            image_url: item.image_url,
        }
    }
}
