use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Inbound body of `POST /shorten-link`.
///
/// Both fields are optional at the wire level so that a missing URL is
/// reported as a validation error rather than a decoding error.
#[derive(Debug, Default, Deserialize)]
pub struct ShortenLinkRequest {
    #[serde(default)]
    pub url: Option<String>,
    /// `None` only when the field is absent; an explicit `null` is kept.
    #[serde(default, deserialize_with = "present")]
    pub service: Option<Value>,
}

impl ShortenLinkRequest {
    /// The requested service identifier. Only an absent field falls back
    /// to the primary provider; `null` or a non-string value is looked up
    /// by its JSON text and rejected as unsupported.
    pub fn service(&self) -> Option<String> {
        self.service.as_ref().map(|service| match service {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    }
}

fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenLinkResponse {
    pub shortened_url: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(body: &str) -> ShortenLinkRequest {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn absent_service_is_none() {
        assert_eq!(decode(r#"{"url":"https://x"}"#).service(), None);
    }

    #[test]
    fn null_service_is_kept() {
        assert_eq!(
            decode(r#"{"url":"https://x","service":null}"#).service(),
            Some("null".to_string())
        );
    }

    #[test]
    fn string_service_is_unquoted() {
        assert_eq!(
            decode(r#"{"service":"mdiskshortner"}"#).service(),
            Some("mdiskshortner".to_string())
        );
    }
}
