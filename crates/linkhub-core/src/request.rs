use crate::error::{GatewayError, Result};
use crate::provider::ProviderId;

/// A validated request to shorten one URL through one provider.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShortenRequest {
    long_url: String,
    provider: ProviderId,
}

impl ShortenRequest {
    /// Creates a request for the given provider after validating the URL.
    ///
    /// The URL must contain at least one non-whitespace character; it is
    /// otherwise passed to the provider as-is.
    pub fn new(long_url: impl Into<String>, provider: ProviderId) -> Result<Self> {
        let long_url = long_url.into();
        if long_url.trim().is_empty() {
            return Err(GatewayError::url_required());
        }
        Ok(Self { long_url, provider })
    }

    /// Builds a request from raw caller input.
    ///
    /// An absent `service` selects the primary provider. A missing URL is
    /// reported before the service is looked at.
    pub fn parse(long_url: Option<String>, service: Option<&str>) -> Result<Self> {
        let long_url = long_url.ok_or_else(GatewayError::url_required)?;
        let provider = match service {
            Some(service) => service.parse()?,
            None => ProviderId::default(),
        };
        Self::new(long_url, provider)
    }

    pub fn long_url(&self) -> &str {
        &self.long_url
    }

    pub fn provider(&self) -> ProviderId {
        self.provider
    }
}

/// A short URL returned by a provider.
///
/// The URL is opaque: it is returned exactly as the provider supplied it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShortenedLink {
    pub short_url: String,
    pub provider: ProviderId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_url_is_rejected() {
        let err = ShortenRequest::parse(None, Some("gplinks")).unwrap_err();
        assert!(matches!(err, GatewayError::Validation(_)));
        assert_eq!(err.to_string(), "URL is required");
    }

    #[test]
    fn blank_urls_are_rejected() {
        for url in ["", " ", "\t\n", "   \r"] {
            let err = ShortenRequest::parse(Some(url.to_string()), None).unwrap_err();
            assert!(matches!(err, GatewayError::Validation(_)), "{url:?}");
        }
    }

    #[test]
    fn url_checked_before_service() {
        let err = ShortenRequest::parse(None, Some("bitly")).unwrap_err();
        assert!(matches!(err, GatewayError::Validation(_)));
    }

    #[test]
    fn blank_url_with_valid_service_is_rejected() {
        let err = ShortenRequest::parse(Some("  ".into()), Some("mdiskshortner")).unwrap_err();
        assert!(matches!(err, GatewayError::Validation(_)));
    }

    #[test]
    fn omitted_service_defaults_to_primary() {
        let request = ShortenRequest::parse(Some("https://example.com".into()), None).unwrap();
        assert_eq!(request.provider(), ProviderId::Gplinks);
        assert_eq!(request.long_url(), "https://example.com");
    }

    #[test]
    fn explicit_service_is_used() {
        let request =
            ShortenRequest::parse(Some("https://example.com".into()), Some("mdiskshortner"))
                .unwrap();
        assert_eq!(request.provider(), ProviderId::Mdiskshortner);
    }

    #[test]
    fn unknown_service_is_rejected() {
        let err =
            ShortenRequest::parse(Some("https://example.com".into()), Some("tinyurl")).unwrap_err();
        assert!(matches!(err, GatewayError::UnsupportedProvider(ref s) if s == "tinyurl"));
    }

    #[test]
    fn url_is_not_trimmed() {
        let request = ShortenRequest::new(" https://example.com ", ProviderId::Gplinks).unwrap();
        assert_eq!(request.long_url(), " https://example.com ");
    }
}
