use std::fmt;

use serde::Serialize;
use url::form_urlencoded::byte_serialize;

use crate::form::{self, Pairs};
use crate::Result;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which Stripe host serves the path. File downloads such as quote PDFs
/// come from the files host rather than the main API.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Host {
    #[default]
    Api,
    Files,
}

/// An API call described but not sent: method, path under the host base,
/// and the already flattened form parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub host: Host,
    pub path: String,
    pub params: Pairs,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        ApiRequest {
            method,
            host: Host::Api,
            path: path.into(),
            params: Vec::new(),
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    pub fn on_files_host(mut self) -> Self {
        self.host = Host::Files;
        self
    }

    pub fn with_params<P: Serialize + ?Sized>(mut self, params: &P) -> Result<Self> {
        self.params = form::to_pairs(params)?;
        Ok(self)
    }

    /// Adds an `expand[]` entry; Stripe accepts these on every endpoint.
    pub fn expand(mut self, field: &str) -> Self {
        let index = self
            .params
            .iter()
            .filter(|(key, _)| key.starts_with("expand["))
            .count();
        self.params
            .push((format!("expand[{}]", index), field.to_owned()));
        self
    }

    pub fn encoded_params(&self) -> String {
        form::encode_pairs(&self.params)
    }
}

/// Escapes an ID for use as a single path segment.
pub fn path_segment(id: &str) -> String {
    byte_serialize(id.as_bytes()).collect::<String>().replace('+', "%20")
}

/// Builds `/v1/{collection}/{id}` and friends from raw segments.
pub(crate) fn resource_path(base: &str, id: &str, suffix: Option<&str>) -> String {
    match suffix {
        Some(suffix) => format!("{}/{}/{}", base, path_segment(id), suffix),
        None => format!("{}/{}", base, path_segment(id)),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde::Serialize;

    use super::*;

    #[derive(Serialize)]
    struct Limit {
        limit: Option<u64>,
    }

    #[test]
    fn ids_are_escaped_in_paths() {
        assert_eq!(path_segment("cs_test_123"), "cs_test_123");
        assert_eq!(path_segment("a/b c"), "a%2Fb%20c");
        assert_eq!(
            resource_path("/v1/quotes", "qt_1", Some("accept")),
            "/v1/quotes/qt_1/accept"
        );
    }

    #[test]
    fn params_and_expand_combine() {
        let request = ApiRequest::get("/v1/prices")
            .with_params(&Limit { limit: Some(3) })
            .unwrap()
            .expand("data.product")
            .expand("data.tiers");
        assert_eq!(
            request.encoded_params(),
            "limit=3&expand[0]=data.product&expand[1]=data.tiers"
        );
    }
}
