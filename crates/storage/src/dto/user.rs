use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::User;

/// Compact user representation used in friend and companion listings.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: Uuid,
    pub username: String,
    pub display_name: String,
    pub avatar: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub is_tastemaker: bool,
}

impl From<User> for UserSummary {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            display_name: user.display_name,
            avatar: user.avatar,
            city: user.city,
            state: user.state,
            is_tastemaker: user.is_tastemaker,
        }
    }
}
