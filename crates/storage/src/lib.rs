use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

pub mod cache;
pub mod dto;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

use error::Result;

/// Connection handle shared by the web layer.
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub async fn new(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    /// Build the pool without connecting; connections are established on
    /// first use. Lets callers construct state before the database is up.
    pub fn connect_lazy(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect_lazy(database_url)?;

        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }
}
