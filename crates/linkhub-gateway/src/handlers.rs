mod cors;
mod health;
mod link;

pub use cors::{cors_layer, preflight_handler, ALLOWED_HEADERS, ALLOWED_METHODS};
pub use health::{health_handler, providers_handler};
pub use link::shorten_link_handler;
