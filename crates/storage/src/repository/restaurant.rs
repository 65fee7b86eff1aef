use sqlx::PgPool;
use uuid::Uuid;

use crate::error::Result;
use crate::models::Restaurant;

pub struct RestaurantRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> RestaurantRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Fetch restaurants by id, ordered by name for deterministic output.
    /// Unknown ids are skipped.
    pub async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Restaurant>> {
        let restaurants = sqlx::query_as::<_, Restaurant>(
            r#"
            SELECT id, name, cuisine, category, price_range, city, state,
                   latitude, longitude, rating, rating_count, created_at
            FROM restaurants
            WHERE id = ANY($1)
            ORDER BY name
            "#,
        )
        .bind(ids)
        .fetch_all(self.pool)
        .await?;

        Ok(restaurants)
    }
}
