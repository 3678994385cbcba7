//! HTTP request handlers.

pub mod create;
pub mod health;
pub mod redirect;
pub mod stats;

pub use create::create_handler;
pub use health::health_handler;
pub use redirect::{fallback_handler, redirect_handler, redirect_home_handler};
pub use stats::{link_stats_handler, stats_handler};
