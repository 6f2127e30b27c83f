//! PostgreSQL pool for `TodoRepo`
//!
//! Opened once at startup and shared by every request; a failed connect is
//! reported to the caller so the `serve` command can abort.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Pool size used when `--max-connections` is not given.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Connect to the todos database with the default pool size.
///
/// ```ignore
/// let repo = TodoRepo::new(create_pool("postgres://localhost/gotodo").await?);
/// ```
pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    create_pool_with_options(database_url, DEFAULT_MAX_CONNECTIONS).await
}

/// Connect to the todos database, capping the pool at `max_connections`.
pub async fn create_pool_with_options(
    database_url: &str,
    max_connections: u32,
) -> Result<PgPool, sqlx::Error> {
    tracing::debug!(max_connections, "connecting to todos database");
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    // DATABASE_URL=postgres://... cargo test -p todo-server -- --ignored

    #[tokio::test]
    #[ignore = "requires database"]
    async fn pool_respects_connection_cap_and_sees_todos_table() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool_with_options(&url, 2)
            .await
            .expect("pool creation failed");
        assert_eq!(pool.options().get_max_connections(), 2);

        sqlx::query(include_str!("../../schema.sql"))
            .execute(&pool)
            .await
            .expect("create table failed");
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM todos")
            .fetch_one(&pool)
            .await
            .expect("count failed");
        assert!(count >= 0);
    }
}
