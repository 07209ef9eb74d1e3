//! API endpoint handlers

pub mod health;
pub mod live_news;
pub mod verify;

pub use health::health_routes;
pub use live_news::live_news_routes;
pub use verify::verify_routes;
