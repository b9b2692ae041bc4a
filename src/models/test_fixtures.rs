use rstest::*;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use crate::store::MIGRATOR;

/// Fresh in-memory database with the `recipes` schema, one per test
#[fixture]
pub async fn test_db() -> SqlitePool {
    // Each connection to an in-memory database gets its own empty copy
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(SqliteConnectOptions::new().in_memory(true))
        .await
        .expect("in-memory database should open");

    MIGRATOR
        .run(&pool)
        .await
        .expect("recipes schema should apply");

    pool
}
