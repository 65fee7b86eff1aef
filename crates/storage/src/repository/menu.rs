use sqlx::PgPool;
use uuid::Uuid;

use crate::error::Result;
use crate::models::MenuItem;

pub struct MenuRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> MenuRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_by_restaurant(&self, restaurant_id: Uuid) -> Result<Vec<MenuItem>> {
        let items = sqlx::query_as::<_, MenuItem>(
            r#"
            SELECT id, restaurant_id, name, description, price, category,
                   is_popular, dietary_info, image_url, created_at
            FROM menu_items
            WHERE restaurant_id = $1
            ORDER BY category NULLS LAST, name
            "#,
        )
        .bind(restaurant_id)
        .fetch_all(self.pool)
        .await?;

        Ok(items)
    }
}
