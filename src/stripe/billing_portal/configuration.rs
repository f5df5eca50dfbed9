use serde::{Deserialize, Serialize};

use crate::request::{resource_path, ApiRequest};
use crate::stripe::application::Application;
use crate::types::common::Metadata;
use crate::types::{Expandable, ListParams};
use crate::Result;

const PATH: &str = "/v1/billing_portal/configurations";

string_enum! {
    pub enum CustomerUpdateAllowed {
        Address => "address",
        Email => "email",
        Name => "name",
        Phone => "phone",
        Shipping => "shipping",
        TaxId => "tax_id",
    }
}

string_enum! {
    pub enum CancellationReasonOption {
        CustomerService => "customer_service",
        LowQuality => "low_quality",
        MissingFeatures => "missing_features",
        Other => "other",
        SwitchedService => "switched_service",
        TooComplex => "too_complex",
        TooExpensive => "too_expensive",
        Unused => "unused",
    }
}

string_enum! {
    pub enum CancelMode {
        AtPeriodEnd => "at_period_end",
        Immediately => "immediately",
    }
}

string_enum! {
    pub enum ProrationBehavior {
        AlwaysInvoice => "always_invoice",
        CreateProrations => "create_prorations",
        None => "none",
    }
}

string_enum! {
    pub enum SubscriptionUpdateAllowed {
        Price => "price",
        PromotionCode => "promotion_code",
        Quantity => "quantity",
    }
}

string_enum! {
    pub enum ScheduleConditionType {
        DecreasingItemAmount => "decreasing_item_amount",
        ShorteningInterval => "shortening_interval",
    }
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct BusinessProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub privacy_policy_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terms_of_service_url: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct CustomerUpdate {
    pub allowed_updates: Vec<CustomerUpdateAllowed>,
    pub enabled: bool,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Toggle {
    pub enabled: bool,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct CancellationReason {
    pub enabled: bool,
    pub options: Vec<CancellationReasonOption>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct SubscriptionCancel {
    pub cancellation_reason: Option<CancellationReason>,
    pub enabled: bool,
    pub mode: Option<CancelMode>,
    pub proration_behavior: Option<ProrationBehavior>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct UpdatableProduct {
    pub prices: Vec<String>,
    pub product: String,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ScheduleCondition {
    #[serde(rename = "type")]
    pub type_: Option<ScheduleConditionType>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ScheduleAtPeriodEnd {
    pub conditions: Vec<ScheduleCondition>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct SubscriptionUpdate {
    pub default_allowed_updates: Vec<SubscriptionUpdateAllowed>,
    pub enabled: bool,
    pub products: Option<Vec<UpdatableProduct>>,
    pub proration_behavior: Option<ProrationBehavior>,
    pub schedule_at_period_end: Option<ScheduleAtPeriodEnd>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Features {
    pub customer_update: Option<CustomerUpdate>,
    pub invoice_history: Option<Toggle>,
    pub payment_method_update: Option<Toggle>,
    pub subscription_cancel: Option<SubscriptionCancel>,
    pub subscription_update: Option<SubscriptionUpdate>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct LoginPage {
    pub enabled: bool,
    pub url: Option<String>,
}

/// Which features the customer portal offers and how it is branded.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Configuration {
    pub id: String,
    pub object: String,
    pub active: bool,
    pub application: Option<Expandable<Application>>,
    pub business_profile: Option<BusinessProfile>,
    pub created: i64,
    pub default_return_url: Option<String>,
    pub features: Option<Features>,
    pub is_default: bool,
    pub livemode: bool,
    pub login_page: Option<LoginPage>,
    pub metadata: Option<Metadata>,
    pub updated: i64,
}

impl_object!(Configuration, "billing_portal.configuration");

impl Configuration {
    pub fn create(params: &CreateConfiguration) -> Result<ApiRequest> {
        ApiRequest::post(PATH).with_params(params)
    }

    pub fn retrieve(id: &str) -> ApiRequest {
        ApiRequest::get(resource_path(PATH, id, None))
    }

    pub fn update(id: &str, params: &UpdateConfiguration) -> Result<ApiRequest> {
        ApiRequest::post(resource_path(PATH, id, None)).with_params(params)
    }

    pub fn list(params: &ListConfigurations) -> Result<ApiRequest> {
        ApiRequest::get(PATH).with_params(params)
    }
}

#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct CustomerUpdateParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_updates: Option<Vec<CustomerUpdateAllowed>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct CancellationReasonParams {
    pub enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<CancellationReasonOption>>,
}

#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct SubscriptionCancelParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancellation_reason: Option<CancellationReasonParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<CancelMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proration_behavior: Option<ProrationBehavior>,
}

#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct UpdatableProductParams {
    pub prices: Vec<String>,
    pub product: String,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct ScheduleConditionParams {
    #[serde(rename = "type")]
    pub type_: ScheduleConditionType,
}

#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct ScheduleAtPeriodEndParams {
    pub conditions: Vec<ScheduleConditionParams>,
}

#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct SubscriptionUpdateParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_allowed_updates: Option<Vec<SubscriptionUpdateAllowed>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub products: Option<Vec<UpdatableProductParams>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proration_behavior: Option<ProrationBehavior>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule_at_period_end: Option<ScheduleAtPeriodEndParams>,
}

#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct FeaturesParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_update: Option<CustomerUpdateParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_history: Option<Toggle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method_update: Option<Toggle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_cancel: Option<SubscriptionCancelParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_update: Option<SubscriptionUpdateParams>,
}

#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct CreateConfiguration {
    pub features: FeaturesParams,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_profile: Option<BusinessProfile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_return_url: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub expand: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub login_page: Option<Toggle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct UpdateConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_profile: Option<BusinessProfile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_return_url: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub expand: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<FeaturesParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub login_page: Option<Toggle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct ListConfigurations {
    #[serde(flatten)]
    pub list: ListParams,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub expand: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,
}

impl_expand!(CreateConfiguration, UpdateConfiguration, ListConfigurations);
impl_metadata!(CreateConfiguration, UpdateConfiguration);

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::form;

    #[test]
    fn features_nest_and_empty_default_return_url_clears() {
        let params = UpdateConfiguration {
            default_return_url: Some(String::new()),
            features: Some(FeaturesParams {
                invoice_history: Some(Toggle { enabled: true }),
                subscription_cancel: Some(SubscriptionCancelParams {
                    enabled: Some(true),
                    mode: Some(CancelMode::AtPeriodEnd),
                    proration_behavior: Some(ProrationBehavior::None),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert_eq!(
            form::to_pairs(&params).unwrap(),
            vec![
                ("default_return_url".to_owned(), String::new()),
                ("features[invoice_history][enabled]".to_owned(), "true".to_owned()),
                ("features[subscription_cancel][enabled]".to_owned(), "true".to_owned()),
                ("features[subscription_cancel][mode]".to_owned(), "at_period_end".to_owned()),
                (
                    "features[subscription_cancel][proration_behavior]".to_owned(),
                    "none".to_owned()
                ),
            ]
        );
    }
}
