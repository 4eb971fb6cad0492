use crate::error::GatewayError;
use serde::Serialize;
use std::fmt::Display;
use std::str::FromStr;

/// A third-party link-shortening API supported by the gateway.
///
/// The set is closed: a provider is only added here together with its
/// credential key, endpoint builder and response extractor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderId {
    /// GPLinks, the primary provider.
    #[default]
    Gplinks,
    /// MDisk Shortner.
    Mdiskshortner,
}

impl ProviderId {
    /// Every supported provider, primary first.
    pub const ALL: [ProviderId; 2] = [ProviderId::Gplinks, ProviderId::Mdiskshortner];

    /// Returns the wire identifier used in the `service` request field.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderId::Gplinks => "gplinks",
            ProviderId::Mdiskshortner => "mdiskshortner",
        }
    }

    /// Returns a human-readable name for error messages.
    pub fn display_name(&self) -> &'static str {
        match self {
            ProviderId::Gplinks => "GPLinks",
            ProviderId::Mdiskshortner => "MDisk Shortner",
        }
    }
}

impl FromStr for ProviderId {
    type Err = GatewayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProviderId::ALL
            .into_iter()
            .find(|provider| provider.as_str() == s)
            .ok_or_else(|| GatewayError::UnsupportedProvider(s.to_string()))
    }
}

impl Display for ProviderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
