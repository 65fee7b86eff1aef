use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use sqlx::FromRow;
use uuid::Uuid;

/// Status values stored in `ratings.status`. The scoring core only ever
/// reads projections of the ratings table, never whole rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingStatus {
    Been,
    /// Deprecated. `users.watchlist` is the canonical want-to-try signal, but
    /// legacy rows with this status are still merged in by the matcher.
    WantToTry,
    Recommended,
}

impl RatingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Been => "been",
            Self::WantToTry => "want_to_try",
            Self::Recommended => "recommended",
        }
    }
}

/// Minimal projection of a `been` rating used for recent-visit exclusion.
#[derive(Debug, Clone, FromRow)]
pub struct BeenVisit {
    pub restaurant_id: Uuid,
    pub visit_date: Option<NaiveDate>,
    pub created_at: NaiveDateTime,
}

/// A `been` rating joined with the visited restaurant, as consumed by the
/// taste profile analyzer.
#[derive(Debug, Clone, FromRow)]
pub struct RatedVisit {
    pub rating: Option<Decimal>,
    pub cuisine: Vec<String>,
    pub price_range: String,
}
