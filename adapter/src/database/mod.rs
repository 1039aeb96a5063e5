use anyhow::Result;
use shared::config::DatabaseConfig;
use sqlx::PgPool;

pub mod model;

#[derive(Clone)]
pub struct ConnectionPool(PgPool);

impl ConnectionPool {
    pub fn new(pool: PgPool) -> Self {
        Self(pool)
    }

    pub fn inner_ref(&self) -> &PgPool {
        &self.0
    }
}

// The pool is lazy: the first query opens the connection, so startup does
// not depend on the database being reachable yet.
pub fn connect_database_with(cfg: &DatabaseConfig) -> Result<ConnectionPool> {
    let pool = PgPool::connect_lazy(&cfg.url)?;
    Ok(ConnectionPool(pool))
}
