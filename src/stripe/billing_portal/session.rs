use serde::{Deserialize, Serialize};

use super::configuration::Configuration;
use crate::request::ApiRequest;
use crate::types::Expandable;
use crate::Result;

const PATH: &str = "/v1/billing_portal/sessions";

string_enum! {
    pub enum AfterCompletionType {
        HostedConfirmation => "hosted_confirmation",
        PortalHomepage => "portal_homepage",
        Redirect => "redirect",
    }
}

string_enum! {
    pub enum RetentionType {
        CouponOffer => "coupon_offer",
    }
}

string_enum! {
    pub enum FlowType {
        PaymentMethodUpdate => "payment_method_update",
        SubscriptionCancel => "subscription_cancel",
        SubscriptionUpdate => "subscription_update",
        SubscriptionUpdateConfirm => "subscription_update_confirm",
    }
}

// The flow shapes are the same on the way in and out, so one set of types
// serves both the session model and `flow_data`.

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct HostedConfirmation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_message: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Redirect {
    pub return_url: String,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct AfterCompletion {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hosted_confirmation: Option<HostedConfirmation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect: Option<Redirect>,
    #[serde(rename = "type")]
    pub type_: AfterCompletionType,
}

impl AfterCompletion {
    pub fn redirect(return_url: impl Into<String>) -> Self {
        AfterCompletion {
            hosted_confirmation: None,
            redirect: Some(Redirect {
                return_url: return_url.into(),
            }),
            type_: AfterCompletionType::Redirect,
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct CouponOffer {
    pub coupon: String,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Retention {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coupon_offer: Option<CouponOffer>,
    #[serde(rename = "type")]
    pub type_: RetentionType,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct FlowSubscriptionCancel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retention: Option<Retention>,
    pub subscription: String,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct FlowSubscriptionUpdate {
    pub subscription: String,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ConfirmDiscount {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coupon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promotion_code: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ConfirmItem {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u64>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct FlowSubscriptionUpdateConfirm {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discounts: Option<Vec<ConfirmDiscount>>,
    pub items: Vec<ConfirmItem>,
    pub subscription: String,
}

/// A deep link into one portal flow instead of the portal homepage.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Flow {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after_completion: Option<AfterCompletion>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription_cancel: Option<FlowSubscriptionCancel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription_update: Option<FlowSubscriptionUpdate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription_update_confirm: Option<FlowSubscriptionUpdateConfirm>,
    #[serde(rename = "type")]
    pub type_: FlowType,
}

impl Flow {
    pub fn new(type_: FlowType) -> Self {
        Flow {
            after_completion: None,
            subscription_cancel: None,
            subscription_update: None,
            subscription_update_confirm: None,
            type_,
        }
    }

    pub fn cancel_subscription(subscription: impl Into<String>) -> Self {
        Flow {
            subscription_cancel: Some(FlowSubscriptionCancel {
                retention: None,
                subscription: subscription.into(),
            }),
            ..Flow::new(FlowType::SubscriptionCancel)
        }
    }
}

/// A short-lived link to the customer portal.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Session {
    pub id: String,
    pub object: String,
    pub configuration: Option<Expandable<Configuration>>,
    pub created: i64,
    pub customer: String,
    pub flow: Option<Flow>,
    pub livemode: bool,
    pub locale: Option<String>,
    pub on_behalf_of: Option<String>,
    pub return_url: Option<String>,
    pub url: String,
}

impl_object!(Session, "billing_portal.session");

impl Session {
    pub fn create(params: &CreateSession) -> Result<ApiRequest> {
        ApiRequest::post(PATH).with_params(params)
    }
}

#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct CreateSession {
    pub customer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub expand: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flow_data: Option<Flow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_behalf_of: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_url: Option<String>,
}

impl CreateSession {
    pub fn new(customer: impl Into<String>) -> Self {
        CreateSession {
            customer: customer.into(),
            ..Default::default()
        }
    }
}

impl_expand!(CreateSession);

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::form;

    #[test]
    fn flow_data_nests_under_its_type() {
        let mut flow = Flow::cancel_subscription("sub_1");
        flow.after_completion = Some(AfterCompletion::redirect("https://example.com/done"));
        let params = CreateSession {
            flow_data: Some(flow),
            return_url: Some("https://example.com".to_owned()),
            ..CreateSession::new("cus_1")
        };
        let request = Session::create(&params).unwrap();
        assert_eq!(request.path, "/v1/billing_portal/sessions");
        assert_eq!(
            form::to_pairs(&params).unwrap(),
            vec![
                ("customer".to_owned(), "cus_1".to_owned()),
                ("flow_data[after_completion][redirect][return_url]".to_owned(), "https://example.com/done".to_owned()),
                ("flow_data[after_completion][type]".to_owned(), "redirect".to_owned()),
                ("flow_data[subscription_cancel][subscription]".to_owned(), "sub_1".to_owned()),
                ("flow_data[type]".to_owned(), "subscription_cancel".to_owned()),
                ("return_url".to_owned(), "https://example.com".to_owned()),
            ]
        );
    }

    #[test]
    fn session_decodes_configuration_as_id() {
        let session: Session = serde_json::from_str(
            r#"{"id":"bps_1","object":"billing_portal.session","configuration":"bpc_1",
                "customer":"cus_1","flow":null,"url":"https://billing.stripe.com/p/session/x"}"#,
        )
        .unwrap();
        assert_eq!(session.configuration.unwrap().id(), "bpc_1");
        assert!(session.flow.is_none());
    }
}
