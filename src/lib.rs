//! Typed models for a slice of the Stripe API.
//!
//! Responses decode with `serde_json`; every field that Stripe may return
//! either as an ID or as an expanded object is an [`Expandable`]. Request
//! parameters serialize through [`form`] into Stripe's bracketed form
//! encoding, and each resource exposes endpoint constructors returning an
//! [`ApiRequest`] that [`StripeClient::prepare`] turns into something any
//! HTTP client can send.

#[macro_use]
mod macros;

pub mod client;
pub mod error;
pub mod form;
pub mod logger;
pub mod request;
pub mod stripe;
pub mod types;

pub use client::{PreparedRequest, StripeClient};
pub use error::{Error, Result};
pub use request::{ApiRequest, Host, Method};
pub use types::{Expandable, List, Object, SearchResult};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
