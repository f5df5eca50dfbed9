use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::related::{PaymentIntent, SetupIntent};
use crate::types::Expandable;

string_enum! {
    pub enum ErrorType {
        Api => "api_error",
        Card => "card_error",
        Idempotency => "idempotency_error",
        InvalidRequest => "invalid_request_error",
    }
}

/// The body of an error response, as found under `"error"`.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ApiError {
    #[serde(rename = "type")]
    pub type_: Option<ErrorType>,
    pub code: Option<String>,
    pub decline_code: Option<String>,
    pub doc_url: Option<String>,
    pub message: Option<String>,
    pub param: Option<String>,
    pub request_log_url: Option<String>,
    pub charge: Option<String>,
    pub payment_intent: Option<Expandable<PaymentIntent>>,
    pub payment_method_type: Option<String>,
    pub request_id: Option<String>,
    pub setup_intent: Option<Expandable<SetupIntent>>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(type_) = &self.type_ {
            write!(f, "{}", type_)?;
        } else {
            f.write_str("error")?;
        }
        if let Some(code) = &self.code {
            write!(f, " ({})", code)?;
        }
        if let Some(message) = &self.message {
            write!(f, ": {}", message)?;
        }
        if let Some(param) = &self.param {
            write!(f, " [param: {}]", param)?;
        }
        Ok(())
    }
}

/// `{ "error": { ... } }`. A body without `error` is not an envelope.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct ApiErrorResponse {
    pub error: ApiError,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn envelope_decodes_and_displays() {
        let response: ApiErrorResponse = serde_json::from_str(
            r#"{"error":{"type":"invalid_request_error","code":"resource_missing",
                "message":"No such price: 'price_x'","param":"price"}}"#,
        )
        .unwrap();
        assert_eq!(response.error.type_, Some(ErrorType::InvalidRequest));
        assert_eq!(
            response.error.to_string(),
            "invalid_request_error (resource_missing): No such price: 'price_x' [param: price]"
        );
    }

    #[test]
    fn intent_references_and_request_id_decode() {
        let response: ApiErrorResponse = serde_json::from_str(
            r#"{"error":{"type":"card_error","code":"setup_intent_authentication_failure",
                "payment_method_type":"card","request_id":"req_1",
                "setup_intent":{"id":"seti_1","object":"setup_intent"}}}"#,
        )
        .unwrap();
        let error = response.error;
        assert_eq!(error.type_, Some(ErrorType::Card));
        assert_eq!(error.payment_method_type.as_deref(), Some("card"));
        assert_eq!(error.request_id.as_deref(), Some("req_1"));
        let setup_intent = error.setup_intent.unwrap();
        assert!(setup_intent.is_object());
        assert_eq!(setup_intent.id(), "seti_1");
    }

    #[test]
    fn envelope_requires_the_error_object() {
        assert!(serde_json::from_str::<ApiErrorResponse>("{}").is_err());
        assert!(serde_json::from_str::<ApiErrorResponse>(r#"{"message":"upstream connect error"}"#).is_err());
    }
}
