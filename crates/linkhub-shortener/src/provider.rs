//! Per-provider knowledge: where the credential comes from, how the
//! endpoint is built and how the short URL is read back.
//!
//! Adding a provider means adding a [`ProviderId`] variant and a
//! [`ProviderSpec`] entry in [`spec_for`]; the gateway's control flow
//! does not change.

use linkhub_core::ProviderId;
use reqwest::Url;
use serde_json::Value;

/// Placeholder written in place of a credential wherever an endpoint is logged.
pub const REDACTED: &str = "[REDACTED]";

/// Outcome of reading a provider's JSON response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    /// The provider returned a short URL.
    Shortened(String),
    /// The provider answered but did not shorten the URL, optionally
    /// saying why.
    Rejected(Option<String>),
}

/// Static description of one provider.
#[derive(Debug)]
pub struct ProviderSpec {
    pub id: ProviderId,
    /// Environment key holding this provider's API credential.
    pub credential_key: &'static str,
    /// Endpoint used when the configuration does not override it.
    pub default_endpoint: &'static str,
    /// Query parameter that carries the credential.
    pub credential_param: &'static str,
    /// Builds the outbound URL from the endpoint base, credential and long URL.
    pub build_endpoint: fn(&Url, &str, &str) -> Url,
    /// Reads the short URL out of a decoded response body.
    pub extract: fn(&Value) -> Extraction,
}

static GPLINKS: ProviderSpec = ProviderSpec {
    id: ProviderId::Gplinks,
    credential_key: "GPLINKS_API_KEY",
    default_endpoint: "https://api.gplinks.com/api",
    credential_param: "api",
    build_endpoint: api_query_endpoint,
    extract: extract_gplinks,
};

static MDISKSHORTNER: ProviderSpec = ProviderSpec {
    id: ProviderId::Mdiskshortner,
    credential_key: "MDISKSHORTNER_API_KEY",
    default_endpoint: "https://mdiskshortner.link/api",
    credential_param: "api",
    build_endpoint: api_query_endpoint,
    extract: extract_mdiskshortner,
};

/// Returns the spec for a provider.
pub fn spec_for(provider: ProviderId) -> &'static ProviderSpec {
    match provider {
        ProviderId::Gplinks => &GPLINKS,
        ProviderId::Mdiskshortner => &MDISKSHORTNER,
    }
}

/// Iterates over the specs of every supported provider.
pub fn specs() -> impl Iterator<Item = &'static ProviderSpec> {
    ProviderId::ALL.into_iter().map(spec_for)
}

impl ProviderSpec {
    /// Renders an endpoint for logging with the credential value replaced.
    pub fn redact(&self, endpoint: &Url) -> String {
        let pairs: Vec<(String, String)> = endpoint
            .query_pairs()
            .map(|(key, value)| {
                let value = if key == self.credential_param {
                    REDACTED.to_string()
                } else {
                    value.into_owned()
                };
                (key.into_owned(), value)
            })
            .collect();

        let mut redacted = endpoint.clone();
        redacted.query_pairs_mut().clear().extend_pairs(pairs);
        redacted.to_string()
    }
}

/// `<base>?api=<credential>&url=<encoded long url>`
fn api_query_endpoint(base: &Url, credential: &str, long_url: &str) -> Url {
    let mut endpoint = base.clone();
    endpoint
        .query_pairs_mut()
        .append_pair("api", credential)
        .append_pair("url", long_url);
    endpoint
}

/// GPLinks reports success with `status: "success"` next to `shortenedUrl`.
fn extract_gplinks(body: &Value) -> Extraction {
    match (body.get("status").and_then(Value::as_str), short_url(body)) {
        (Some("success"), Some(url)) => Extraction::Shortened(url),
        _ => Extraction::Rejected(message(body)),
    }
}

/// MDisk Shortner has no status marker; `shortenedUrl` alone means success.
fn extract_mdiskshortner(body: &Value) -> Extraction {
    match short_url(body) {
        Some(url) => Extraction::Shortened(url),
        None => Extraction::Rejected(message(body)),
    }
}

fn short_url(body: &Value) -> Option<String> {
    non_empty_str(body, "shortenedUrl")
}

fn message(body: &Value) -> Option<String> {
    non_empty_str(body, "message")
}

fn non_empty_str(body: &Value, field: &str) -> Option<String> {
    body.get(field)
        .and_then(Value::as_str)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn base(spec: &ProviderSpec) -> Url {
        Url::parse(spec.default_endpoint).unwrap()
    }

    #[test]
    fn every_provider_has_a_spec() {
        for provider in ProviderId::ALL {
            assert_eq!(spec_for(provider).id, provider);
        }
        assert_eq!(specs().count(), ProviderId::ALL.len());
    }

    #[test]
    fn credential_keys_are_distinct() {
        assert_ne!(GPLINKS.credential_key, MDISKSHORTNER.credential_key);
    }

    #[test]
    fn gplinks_endpoint() {
        let endpoint = (GPLINKS.build_endpoint)(&base(&GPLINKS), "k3y", "https://example.com/a?b=c&d=e");
        assert_eq!(endpoint.host_str(), Some("api.gplinks.com"));
        assert_eq!(endpoint.path(), "/api");

        let pairs: Vec<(String, String)> = endpoint
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("api".to_string(), "k3y".to_string()),
                ("url".to_string(), "https://example.com/a?b=c&d=e".to_string()),
            ]
        );
        // the target URL must not leak extra query parameters into the endpoint
        assert!(!endpoint.as_str().contains("&d=e"));
    }

    #[test]
    fn mdiskshortner_endpoint() {
        let endpoint = (MDISKSHORTNER.build_endpoint)(
            &base(&MDISKSHORTNER),
            "secret",
            "https://example.com",
        );
        assert_eq!(endpoint.host_str(), Some("mdiskshortner.link"));
        assert!(endpoint.as_str().starts_with("https://mdiskshortner.link/api?api=secret&url="));
    }

    #[test]
    fn redact_hides_credential() {
        let endpoint = (GPLINKS.build_endpoint)(&base(&GPLINKS), "top-secret", "https://example.com");
        let redacted = GPLINKS.redact(&endpoint);

        assert!(!redacted.contains("top-secret"));
        assert!(redacted.contains("REDACTED"));
        assert!(redacted.contains("url=https%3A%2F%2Fexample.com"));
    }

    #[test]
    fn gplinks_success() {
        let body = json!({ "status": "success", "shortenedUrl": "https://gplinks.co/abc" });
        assert_eq!(
            extract_gplinks(&body),
            Extraction::Shortened("https://gplinks.co/abc".to_string())
        );
    }

    #[test]
    fn gplinks_requires_status_marker() {
        let body = json!({ "status": "fail", "shortenedUrl": "https://gplinks.co/abc" });
        assert_eq!(extract_gplinks(&body), Extraction::Rejected(None));

        let body = json!({ "shortenedUrl": "https://gplinks.co/abc" });
        assert_eq!(extract_gplinks(&body), Extraction::Rejected(None));
    }

    #[test]
    fn gplinks_requires_url() {
        let body = json!({ "status": "success", "message": "quota exceeded" });
        assert_eq!(
            extract_gplinks(&body),
            Extraction::Rejected(Some("quota exceeded".to_string()))
        );
    }

    #[test]
    fn mdiskshortner_success_without_status() {
        let body = json!({ "shortenedUrl": "https://mdisk.link/x" });
        assert_eq!(
            extract_mdiskshortner(&body),
            Extraction::Shortened("https://mdisk.link/x".to_string())
        );
    }

    #[test]
    fn mdiskshortner_rejection() {
        let body = json!({ "status": "error", "message": "Invalid API key" });
        assert_eq!(
            extract_mdiskshortner(&body),
            Extraction::Rejected(Some("Invalid API key".to_string()))
        );

        let body = json!({ "shortenedUrl": "", "message": "" });
        assert_eq!(extract_mdiskshortner(&body), Extraction::Rejected(None));
    }

    #[test]
    fn non_object_bodies_are_rejected() {
        for body in [json!(null), json!("https://x/y"), json!([1, 2]), json!(42)] {
            assert_eq!(extract_gplinks(&body), Extraction::Rejected(None));
            assert_eq!(extract_mdiskshortner(&body), Extraction::Rejected(None));
        }
    }
}
