use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct MenuItem {
    pub id: Uuid,
    pub restaurant_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    /// appetizer / entree / side / dessert / drink.
    pub category: Option<String>,
    pub is_popular: bool,
    pub dietary_info: Vec<String>,
    pub image_url: Option<String>,
    pub created_at: chrono::NaiveDateTime,
}
