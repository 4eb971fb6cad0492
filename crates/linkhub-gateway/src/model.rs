mod health;
mod link;

pub use health::{HealthResponse, ProviderStatus, ProvidersResponse};
pub use link::{ErrorResponse, ShortenLinkRequest, ShortenLinkResponse};
