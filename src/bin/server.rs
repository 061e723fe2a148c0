//! Screener server: stock and common routes over a PostgreSQL pool.

use axum::Router;
use screener_backend::{
    common_routes, ensure_database_exists, ensure_stocks_table, seed_demo_stocks, stock_routes,
    AppState,
};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("screener_backend=info,server=info")),
        )
        .init();

    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| "postgres://localhost/screener".into());
    ensure_database_exists(&database_url).await?;
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;

    ensure_stocks_table(&pool).await?;
    let seed = std::env::var("SEED_DEMO_DATA")
        .map(|v| v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);
    if seed {
        let inserted = seed_demo_stocks(&pool).await?;
        if inserted > 0 {
            tracing::info!(inserted, "seeded demo stocks");
        }
    }

    let state = AppState { pool };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .merge(common_routes(state.clone()))
        .nest("/api/stocks", stock_routes(state))
        .layer(cors);

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(5000);
    let listener = TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
