use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::error::Result;
use crate::models::{BeenVisit, RatedVisit, RatingStatus};

#[derive(FromRow)]
struct WantToTryRow {
    restaurant_id: Uuid,
    user_id: Uuid,
}

pub struct RatingRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> RatingRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Legacy want-to-try rows for a set of users, as (restaurant, user)
    /// pairs. The matcher merges these on top of `users.watchlist`.
    pub async fn want_to_try_pairs(&self, user_ids: &[Uuid]) -> Result<Vec<(Uuid, Uuid)>> {
        let rows = sqlx::query_as::<_, WantToTryRow>(
            r#"
            SELECT restaurant_id, user_id
            FROM ratings
            WHERE user_id = ANY($1) AND status = 'want_to_try'
            ORDER BY created_at
            "#,
        )
        .bind(user_ids)
        .fetch_all(self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| (row.restaurant_id, row.user_id))
            .collect())
    }

    /// All `been` visits for a set of users. The 30-day exclusion window is
    /// applied in the service so the boundary predicate stays unit-testable.
    pub async fn been_visits(&self, user_ids: &[Uuid]) -> Result<Vec<BeenVisit>> {
        let visits = sqlx::query_as::<_, BeenVisit>(
            r#"
            SELECT restaurant_id, visit_date, created_at
            FROM ratings
            WHERE user_id = ANY($1) AND status = 'been'
            "#,
        )
        .bind(user_ids)
        .fetch_all(self.pool)
        .await?;

        Ok(visits)
    }

    /// Restaurant ids a user has rated with any of the given statuses.
    pub async fn restaurant_ids_with_status(
        &self,
        user_id: Uuid,
        statuses: &[RatingStatus],
    ) -> Result<Vec<Uuid>> {
        let statuses: Vec<String> = statuses.iter().map(|s| s.as_str().to_string()).collect();

        let ids = sqlx::query_scalar::<_, Uuid>(
            r#"
            SELECT restaurant_id
            FROM ratings
            WHERE user_id = $1 AND status = ANY($2)
            "#,
        )
        .bind(user_id)
        .bind(&statuses)
        .fetch_all(self.pool)
        .await?;

        Ok(ids)
    }

    /// `been` ratings joined with their restaurants, in rating creation order
    /// so downstream frequency counters tie-break by first encounter.
    pub async fn rated_visits(&self, user_id: Uuid) -> Result<Vec<RatedVisit>> {
        let visits = sqlx::query_as::<_, RatedVisit>(
            r#"
            SELECT r.rating, rest.cuisine, rest.price_range
            FROM ratings r
            INNER JOIN restaurants rest ON rest.id = r.restaurant_id
            WHERE r.user_id = $1 AND r.status = 'been'
            ORDER BY r.created_at
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(visits)
    }

    /// Companion arrays from the user's most recent `been` visits.
    pub async fn recent_companion_lists(
        &self,
        user_id: Uuid,
        limit: i64,
    ) -> Result<Vec<Vec<Uuid>>> {
        let lists = sqlx::query_scalar::<_, Vec<Uuid>>(
            r#"
            SELECT companions
            FROM ratings
            WHERE user_id = $1 AND status = 'been' AND cardinality(companions) > 0
            ORDER BY created_at DESC
            LIMIT $2
            "#,
        )
        .bind(user_id)
        .bind(limit)
        .fetch_all(self.pool)
        .await?;

        Ok(lists)
    }
}
