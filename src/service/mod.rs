//! ScreenerService: query execution over the safe SQL builder.

mod screener;
pub use screener::ScreenerService;
