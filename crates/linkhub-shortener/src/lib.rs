//! Multi-provider link-shortening gateway.
//!
//! [`ShortenerGateway`] forwards a long URL to one third-party shortening
//! API and normalizes its answer into a [`ShortenedLink`] or a
//! [`GatewayError`]. Provider differences live in the [`provider`] table;
//! credentials and endpoints are injected through [`GatewayConfig`].
//!
//! # Example
//!
//! ```rust,no_run
//! use linkhub_core::{ProviderId, ShortenRequest, Shortener};
//! use linkhub_shortener::{Credentials, GatewayConfig, ShortenerGateway};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = GatewayConfig::builder()
//!     .credentials(Credentials::from_env())
//!     .build();
//! let gateway = ShortenerGateway::new(config)?;
//!
//! let request = ShortenRequest::new("https://example.com/a/long/path", ProviderId::Gplinks)?;
//! let link = gateway.shorten(request).await?;
//! println!("{}", link.short_url);
//! # Ok(())
//! # }
//! ```
//!
//! [`ShortenedLink`]: linkhub_core::ShortenedLink
//! [`GatewayError`]: linkhub_core::GatewayError

pub mod config;
pub mod provider;
pub mod service;

pub use config::{Credential, Credentials, GatewayConfig, DEFAULT_UPSTREAM_TIMEOUT};
pub use reqwest::Url;
pub use service::ShortenerGateway;
