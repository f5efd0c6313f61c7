use anyhow::Context;
use config::Config;
use database::db::create_connection;
use env_logger::Env;
use log::info;
use migration::{Migrator, MigratorTrait};
use state::AppState;
use utils::shutdown::shutdown_signal;

mod app;
mod config;
mod doc;
mod dtos;
mod error;
mod routes;
mod state;
mod utils;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = Config::from_env()?;

    let db = create_connection(&config.database_url)
        .await
        .context("failed to connect to the database")?;
    Migrator::up(&db, None)
        .await
        .context("failed to run database migrations")?;

    if !config.admissions.open {
        info!("Admissions are closed; registrations will be refused");
    }

    let app = app::build_router(AppState {
        db,
        admissions: config.admissions,
    });

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    info!("Running axum on http://{}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
