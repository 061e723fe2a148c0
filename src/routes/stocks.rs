//! Stock routes: listing plus both screener variants. Nest under /api/stocks.

use crate::handlers::stocks::{ai_screen, list_all, screen};
use crate::state::AppState;
use axum::{routing::get, routing::post, Router};

pub fn stock_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(list_all))
        .route("/screener", get(screen))
        .route("/ai-screener", post(ai_screen))
        .with_state(state)
}
