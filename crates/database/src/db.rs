use log::LevelFilter;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use std::time::Duration;

/// Pool size for file-backed and server databases
const MAX_CONNECTIONS: u32 = 10;

/// Creates a database connection
///
/// An in-memory SQLite database lives and dies with a single connection, so
/// the pool is pinned to one connection for `:memory:` URLs.
pub async fn create_connection(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(database_url);

    if database_url.contains(":memory:") {
        options.max_connections(1).min_connections(1);
    } else {
        options.max_connections(MAX_CONNECTIONS);
    }

    options
        .connect_timeout(Duration::from_secs(8))
        .sqlx_logging(true)
        .sqlx_logging_level(LevelFilter::Debug);

    Database::connect(options).await
}
