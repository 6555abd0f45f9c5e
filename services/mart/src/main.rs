use sea_orm::Database;
use sea_orm_migration::MigratorTrait;
use tracing::info;

use mart::config::MartConfig;
use mart::router::build_router;
use mart::state::AppState;

#[tokio::main]
async fn main() {
    mart_core::tracing::init_tracing();

    let config = MartConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    // Apply pending migrations so a fresh database is usable without a
    // separate migration step. The `migration` binary covers rollbacks.
    mart_migration::Migrator::up(&db, None)
        .await
        .expect("failed to run migrations");

    let state = AppState { db };
    let router = build_router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("mart service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
