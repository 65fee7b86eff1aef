use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MatchResponse {
    /// Taste compatibility, always within [30, 99].
    pub match_percentage: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BatchMatchRequest {
    #[validate(length(min = 1, max = 50, message = "targetIds must contain 1 to 50 entries"))]
    pub target_ids: Vec<Uuid>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BatchMatchResponse {
    pub matches: BTreeMap<Uuid, i64>,
}
