use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub display_name: String,
    pub avatar: Option<String>,
    pub bio: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub is_tastemaker: bool,
    /// Want-to-try restaurant ids. This is the canonical source; the legacy
    /// `want_to_try` rating status is merged on top of it where relevant.
    pub watchlist: Vec<Uuid>,
    pub created_at: chrono::NaiveDateTime,
    pub updated_at: chrono::NaiveDateTime,
}
