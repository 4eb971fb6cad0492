//! Core types and traits for the Linkhub link-shortening gateway.
//!
//! This crate provides the shared request/response types, the error
//! taxonomy and the [`Shortener`] trait used by both the gateway service
//! and its HTTP surface.

pub mod error;
pub mod provider;
pub mod request;
pub mod shortener;

pub use error::{GatewayError, UpstreamError};
pub use provider::ProviderId;
pub use request::{ShortenRequest, ShortenedLink};
pub use shortener::Shortener;
