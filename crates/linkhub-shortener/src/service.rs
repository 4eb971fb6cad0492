use crate::config::{Credentials, GatewayConfig};
use crate::provider::{spec_for, Extraction, ProviderSpec};
use async_trait::async_trait;
use linkhub_core::error::DEFAULT_FAILURE_MESSAGE;
use linkhub_core::{
    GatewayError, ProviderId, ShortenRequest, ShortenedLink, Shortener, UpstreamError,
};
use reqwest::Url;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Upper bound on how much of an upstream error body is kept for diagnostics.
const MAX_DIAGNOSTIC_BODY_BYTES: usize = 512;

/// The link-shortening gateway.
///
/// Translates a [`ShortenRequest`] into exactly one GET against the
/// requested provider and reads the short URL back with that provider's
/// own extractor. The gateway holds no per-request state, so a single
/// instance can be shared across any number of concurrent requests.
#[derive(Debug, Clone)]
pub struct ShortenerGateway {
    client: reqwest::Client,
    credentials: Arc<Credentials>,
    endpoints: Arc<HashMap<ProviderId, Url>>,
}

impl ShortenerGateway {
    /// Creates a gateway from an explicit configuration.
    ///
    /// Fails only if a provider's endpoint base is not a valid URL or the
    /// HTTP client cannot be constructed.
    pub fn new(config: GatewayConfig) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| GatewayError::Internal(format!("failed to build http client: {e}")))?;

        let mut endpoints = HashMap::with_capacity(ProviderId::ALL.len());
        for provider in ProviderId::ALL {
            let endpoint = match config.endpoint_overrides().get(&provider) {
                Some(endpoint) => endpoint.clone(),
                None => {
                    let spec = spec_for(provider);
                    Url::parse(spec.default_endpoint).map_err(|e| {
                        GatewayError::Internal(format!(
                            "invalid endpoint for {provider}: {e}"
                        ))
                    })?
                }
            };
            endpoints.insert(provider, endpoint);
        }

        Ok(Self {
            client,
            credentials: Arc::new(config.credentials().clone()),
            endpoints: Arc::new(endpoints),
        })
    }

    fn endpoint_base(&self, provider: ProviderId) -> Result<&Url, GatewayError> {
        self.endpoints
            .get(&provider)
            .ok_or_else(|| GatewayError::Internal(format!("no endpoint for {provider}")))
    }

    /// Issues the outbound call and decodes the JSON body.
    async fn call(&self, spec: &ProviderSpec, endpoint: Url) -> Result<Value, UpstreamError> {
        let provider = spec.id;
        let response = self
            .client
            .get(endpoint)
            .send()
            .await
            .map_err(|e| map_reqwest_error(provider, e))?;

        let status = response.status();
        info!(provider = %provider, status = status.as_u16(), "provider responded");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let body = truncate_body(&body);
            warn!(provider = %provider, status = status.as_u16(), body = %body, "provider returned an error status");
            return Err(UpstreamError::Status {
                provider,
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| map_reqwest_error(provider, e))?;

        serde_json::from_slice(&bytes).map_err(|e| {
            warn!(provider = %provider, error = %e, "provider returned malformed JSON");
            UpstreamError::MalformedBody {
                provider,
                message: e.to_string(),
            }
        })
    }
}

#[async_trait]
impl Shortener for ShortenerGateway {
    async fn shorten(&self, request: ShortenRequest) -> Result<ShortenedLink, GatewayError> {
        let provider = request.provider();
        let spec = spec_for(provider);
        info!(provider = %provider, "shortening url");
        debug!(provider = %provider, url = request.long_url(), "shorten request");

        let credential = self.credentials.get(provider).ok_or_else(|| {
            warn!(provider = %provider, key = spec.credential_key, "provider credential not configured");
            GatewayError::Configuration {
                provider,
                credential_key: spec.credential_key,
            }
        })?;

        let endpoint = (spec.build_endpoint)(
            self.endpoint_base(provider)?,
            credential.expose(),
            request.long_url(),
        );
        debug!(provider = %provider, endpoint = %spec.redact(&endpoint), "calling provider");

        let body = self.call(spec, endpoint).await?;

        match (spec.extract)(&body) {
            Extraction::Shortened(short_url) => {
                info!(provider = %provider, short_url = %short_url, "url shortened");
                Ok(ShortenedLink {
                    short_url,
                    provider,
                })
            }
            Extraction::Rejected(message) => {
                warn!(provider = %provider, response = %body, "provider did not return a short url");
                Err(UpstreamError::Rejected {
                    provider,
                    message: message.unwrap_or_else(|| DEFAULT_FAILURE_MESSAGE.to_string()),
                }
                .into())
            }
        }
    }

    fn is_configured(&self, provider: ProviderId) -> bool {
        self.credentials.contains(provider)
    }
}

fn map_reqwest_error(provider: ProviderId, err: reqwest::Error) -> UpstreamError {
    if err.is_timeout() {
        warn!(provider = %provider, "provider request timed out");
        UpstreamError::Timeout { provider }
    } else {
        // reqwest errors embed the request URL, which carries the credential
        let message = err.without_url().to_string();
        warn!(provider = %provider, error = %message, "provider request failed");
        UpstreamError::Transport { provider, message }
    }
}

fn truncate_body(body: &str) -> String {
    if body.len() <= MAX_DIAGNOSTIC_BODY_BYTES {
        return body.to_string();
    }
    let mut end = MAX_DIAGNOSTIC_BODY_BYTES;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}
