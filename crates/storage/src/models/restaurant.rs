use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Denormalized restaurant row. `rating`/`rating_count` are aggregates
/// recalculated outside this service; the scoring core only reads them.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Restaurant {
    pub id: Uuid,
    pub name: String,
    pub cuisine: Vec<String>,
    pub category: String,
    /// "$" through "$$$$".
    pub price_range: String,
    pub city: Option<String>,
    pub state: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub rating: Option<Decimal>,
    pub rating_count: i32,
    pub created_at: chrono::NaiveDateTime,
}
