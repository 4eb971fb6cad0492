use crate::provider::ProviderId;
use thiserror::Error;

/// Result type for gateway operations.
pub type Result<T> = std::result::Result<T, GatewayError>;

/// Fallback message used when a provider rejects a request without saying why.
pub const DEFAULT_FAILURE_MESSAGE: &str = "Failed to shorten link";

/// Errors returned by a [`Shortener`](crate::Shortener).
///
/// Every variant is terminal for the request; nothing is retried internally.
#[derive(Debug, Clone, Error)]
pub enum GatewayError {
    /// The caller supplied a missing or malformed input.
    #[error("{0}")]
    Validation(String),
    /// The `service` identifier is not in the supported set.
    #[error("Unsupported service: {0}")]
    UnsupportedProvider(String),
    /// A supported provider has no credential in this deployment.
    #[error("{} not configured", provider.display_name())]
    Configuration {
        provider: ProviderId,
        credential_key: &'static str,
    },
    /// The provider could not be reached or did not return a short URL.
    #[error(transparent)]
    Upstream(#[from] UpstreamError),
    /// Any other unexpected failure.
    #[error("{0}")]
    Internal(String),
}

impl GatewayError {
    /// The error reported when the long URL is absent or blank.
    pub fn url_required() -> Self {
        GatewayError::Validation("URL is required".to_string())
    }

    /// Returns `true` when the error was caused by the caller's input
    /// rather than by this deployment or a provider.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            GatewayError::Validation(_) | GatewayError::UnsupportedProvider(_)
        )
    }
}

#[derive(Debug, Clone, Error)]
pub enum UpstreamError {
    #[error("{provider} request timed out")]
    Timeout { provider: ProviderId },
    #[error("{provider} request failed: {message}")]
    Transport {
        provider: ProviderId,
        message: String,
    },
    #[error("{provider} responded with HTTP {status}")]
    Status {
        provider: ProviderId,
        status: u16,
        /// Response body, truncated for diagnostics.
        body: String,
    },
    #[error("{provider} returned a malformed response: {message}")]
    MalformedBody {
        provider: ProviderId,
        message: String,
    },
    #[error("{message}")]
    Rejected {
        provider: ProviderId,
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_error_names_provider() {
        let err = GatewayError::Configuration {
            provider: ProviderId::Mdiskshortner,
            credential_key: "MDISKSHORTNER_API_KEY",
        };
        assert_eq!(err.to_string(), "MDisk Shortner not configured");
        assert!(!err.is_client_error());
    }

    #[test]
    fn client_errors() {
        assert!(GatewayError::url_required().is_client_error());
        assert!(GatewayError::UnsupportedProvider("x".into()).is_client_error());
        assert!(!GatewayError::Internal("boom".into()).is_client_error());
    }

    #[test]
    fn rejected_displays_provider_message_only() {
        let err: GatewayError = UpstreamError::Rejected {
            provider: ProviderId::Gplinks,
            message: "Invalid API token".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "Invalid API token");
    }

    #[test]
    fn status_error_names_provider() {
        let err = UpstreamError::Status {
            provider: ProviderId::Gplinks,
            status: 502,
            body: "bad gateway".to_string(),
        };
        assert_eq!(err.to_string(), "gplinks responded with HTTP 502");
    }
}
