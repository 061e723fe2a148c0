//! Screener backend: stock-screening REST service over PostgreSQL.

pub mod error;
pub mod filter;
pub mod handlers;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use error::AppError;
pub use filter::ScreenerFilter;
pub use routes::{common_routes, stock_routes};
pub use service::ScreenerService;
pub use sql::{build_screener_query, select_all_stocks, BindValue, QueryBuf};
pub use state::AppState;
pub use store::{ensure_database_exists, ensure_stocks_table, seed_demo_stocks};
