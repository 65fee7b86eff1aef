use sqlx::PgPool;
use uuid::Uuid;

use crate::error::Result;
use crate::models::User;

pub struct UserRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Fetch users by id. Unknown ids are silently skipped; callers that need
    /// existence checks should compare lengths.
    pub async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<User>> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, display_name, avatar, bio, city, state,
                   is_tastemaker, watchlist, created_at, updated_at
            FROM users
            WHERE id = ANY($1)
            "#,
        )
        .bind(ids)
        .fetch_all(self.pool)
        .await?;

        Ok(users)
    }

    /// Users the given user follows, ordered by username.
    pub async fn following(&self, user_id: Uuid) -> Result<Vec<User>> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT u.id, u.username, u.display_name, u.avatar, u.bio, u.city, u.state,
                   u.is_tastemaker, u.watchlist, u.created_at, u.updated_at
            FROM users u
            INNER JOIN user_follows f ON f.following_id = u.id
            WHERE f.follower_id = $1
            ORDER BY u.username
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(users)
    }
}
