use crate::error::Result;
use crate::provider::ProviderId;
use crate::request::{ShortenRequest, ShortenedLink};
use async_trait::async_trait;

#[async_trait]
pub trait Shortener: Send + Sync + 'static {
    /// Shortens a URL through the provider named in the request.
    ///
    /// Each call issues at most one outbound request and is never retried.
    async fn shorten(&self, request: ShortenRequest) -> Result<ShortenedLink>;

    /// Returns whether the provider has a credential in this deployment.
    fn is_configured(&self, provider: ProviderId) -> bool;
}
