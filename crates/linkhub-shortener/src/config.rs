use crate::provider::specs;
use linkhub_core::ProviderId;
use reqwest::Url;
use std::collections::HashMap;
use std::fmt::{Debug, Formatter};
use std::time::Duration;
use tracing::{debug, warn};
use typed_builder::TypedBuilder;

/// Bound applied to every outbound provider call.
pub const DEFAULT_UPSTREAM_TIMEOUT: Duration = Duration::from_secs(10);

/// A provider API credential. Never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the raw credential for placing into an outbound request.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("Credential([REDACTED])")
    }
}

/// Credentials available to this deployment, keyed by provider.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    keys: HashMap<ProviderId, Credential>,
}

impl Credentials {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads each provider's credential from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads each provider's credential through `lookup`, keyed by the
    /// provider's credential key. Blank values count as missing.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut credentials = Self::new();
        for spec in specs() {
            match lookup(spec.credential_key) {
                Some(value) if !value.trim().is_empty() => {
                    debug!(provider = %spec.id, key = spec.credential_key, "credential loaded");
                    credentials.insert(spec.id, value.trim());
                }
                _ => {
                    warn!(provider = %spec.id, key = spec.credential_key, "credential not set, provider disabled");
                }
            }
        }
        credentials
    }

    /// Adds or replaces a provider's credential.
    pub fn with(mut self, provider: ProviderId, value: impl Into<String>) -> Self {
        self.insert(provider, value);
        self
    }

    pub fn insert(&mut self, provider: ProviderId, value: impl Into<String>) {
        self.keys.insert(provider, Credential::new(value));
    }

    pub fn get(&self, provider: ProviderId) -> Option<&Credential> {
        self.keys.get(&provider)
    }

    pub fn contains(&self, provider: ProviderId) -> bool {
        self.keys.contains_key(&provider)
    }
}

/// Configuration injected into [`ShortenerGateway`](crate::ShortenerGateway).
#[derive(Debug, Clone, TypedBuilder)]
pub struct GatewayConfig {
    #[builder(default)]
    credentials: Credentials,
    #[builder(default = DEFAULT_UPSTREAM_TIMEOUT)]
    timeout: Duration,
    /// Replaces a provider's default endpoint base, e.g. for staging.
    #[builder(default)]
    endpoint_overrides: HashMap<ProviderId, Url>,
}

impl GatewayConfig {
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn endpoint_overrides(&self) -> &HashMap<ProviderId, Url> {
        &self.endpoint_overrides
    }
}
