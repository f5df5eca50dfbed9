use dotenvy::dotenv;
use log::{debug, trace, warn};
use serde::de::DeserializeOwned;
use std::env as stdenv;
use url::Url;

use crate::request::{ApiRequest, Host, Method};
use crate::stripe::api_error::{ApiError, ApiErrorResponse};
use crate::{Error, Result};

pub const DEFAULT_API_BASE: &str = "https://api.stripe.com";
pub const DEFAULT_FILES_BASE: &str = "https://files.stripe.com";
pub const DEFAULT_API_VERSION: &str = "2024-12-18.acacia";
pub const USER_AGENT: &str = env!("STRIPE_RESOURCES_USER_AGENT");

/// Where and how requests are addressed. Holds no credentials and never
/// sends anything; the caller's HTTP client does that with the
/// [`PreparedRequest`] it gets back.
#[derive(Clone, Debug)]
pub struct StripeClient {
    pub api_base: Url,
    pub files_base: Url,
    pub api_version: String,
    pub stripe_account: Option<String>,
    pub user_agent: String,
}

/// A request ready to hand to an HTTP client.
#[derive(Clone, Debug, PartialEq)]
pub struct PreparedRequest {
    pub method: Method,
    pub url: Url,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl PreparedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

impl Default for StripeClient {
    fn default() -> Self {
        Self::new()
    }
}

impl StripeClient {
    pub fn new() -> Self {
        Self {
            api_base: Url::parse(DEFAULT_API_BASE).expect("default API base is a valid URL"),
            files_base: Url::parse(DEFAULT_FILES_BASE).expect("default files base is a valid URL"),
            api_version: DEFAULT_API_VERSION.to_owned(),
            stripe_account: None,
            user_agent: USER_AGENT.to_owned(),
        }
    }

    /// Loads `.env` if present, then reads `STRIPE_API_BASE`,
    /// `STRIPE_FILES_BASE`, `STRIPE_API_VERSION` and `STRIPE_ACCOUNT` over
    /// the defaults.
    pub fn from_env() -> Result<Self> {
        dotenv().ok();
        let mut client = Self::new();
        if let Ok(base) = stdenv::var("STRIPE_API_BASE") {
            client = client.with_api_base(&base)?;
        }
        if let Ok(base) = stdenv::var("STRIPE_FILES_BASE") {
            client = client.with_files_base(&base)?;
        }
        if let Ok(version) = stdenv::var("STRIPE_API_VERSION") {
            if version.trim().is_empty() {
                return Err(Error::Config("STRIPE_API_VERSION is empty".to_owned()));
            }
            client.api_version = version;
        }
        client.stripe_account = stdenv::var("STRIPE_ACCOUNT")
            .ok()
            .filter(|account| !account.is_empty());
        Ok(client)
    }

    pub fn with_api_base(mut self, base: &str) -> Result<Self> {
        self.api_base = parse_base(base)?;
        Ok(self)
    }

    pub fn with_files_base(mut self, base: &str) -> Result<Self> {
        self.files_base = parse_base(base)?;
        Ok(self)
    }

    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    /// Acts on behalf of a connected account.
    pub fn with_stripe_account(mut self, account: impl Into<String>) -> Self {
        self.stripe_account = Some(account.into());
        self
    }

    pub fn prepare(&self, request: &ApiRequest) -> Result<PreparedRequest> {
        // keep any path prefix on the base, e.g. a local proxy mount
        let mut url = match request.host {
            Host::Api => self.api_base.clone(),
            Host::Files => self.files_base.clone(),
        };
        let path = format!("{}{}", url.path().trim_end_matches('/'), request.path);
        url.set_path(&path);
        let mut headers = vec![
            ("Stripe-Version".to_owned(), self.api_version.clone()),
            ("User-Agent".to_owned(), self.user_agent.clone()),
        ];
        if let Some(account) = &self.stripe_account {
            headers.push(("Stripe-Account".to_owned(), account.clone()));
        }

        let encoded = request.encoded_params();
        let body = match request.method {
            Method::Post => {
                headers.push((
                    "Content-Type".to_owned(),
                    "application/x-www-form-urlencoded".to_owned(),
                ));
                Some(encoded)
            }
            Method::Get | Method::Delete => {
                if !encoded.is_empty() {
                    url.set_query(Some(&encoded));
                }
                None
            }
        };

        debug!("Prepared {} {} ({} params)", request.method, url, request.params.len());
        Ok(PreparedRequest {
            method: request.method,
            url,
            headers,
            body,
        })
    }

    /// Decodes a response body, turning 4xx/5xx statuses into [`Error::Api`].
    pub fn decode_response<T: DeserializeOwned>(&self, status: u16, body: &str) -> Result<T> {
        if status >= 400 {
            let error = match serde_json::from_str::<ApiErrorResponse>(body) {
                Ok(envelope) => envelope.error,
                Err(_) => ApiError {
                    message: Some(body.to_owned()),
                    ..Default::default()
                },
            };
            warn!("Stripe returned HTTP {}: {}", status, error);
            return Err(Error::Api {
                status,
                error: Box::new(error),
            });
        }
        trace!("Decoding {} byte response body", body.len());
        Ok(serde_json::from_str(body)?)
    }
}

fn parse_base(base: &str) -> Result<Url> {
    let url = Url::parse(base)?;
    if url.cannot_be_a_base() {
        return Err(Error::Config(format!("{} cannot be used as a base URL", base)));
    }
    Ok(url)
}
