pub mod group_dinner;
pub mod match_score;
pub mod order_suggestion;
pub mod taste_profile;
