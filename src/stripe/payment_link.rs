use serde::{Deserialize, Serialize};

use super::application::Application;
use super::checkout_session::{
    AdjustableQuantity, ConsentCollection, ConsentCollectionParams, EnabledParams,
    PhoneNumberCollection, ShippingAddressCollection, ShippingAddressCollectionParams,
    ShippingOption, ShippingOptionParams, TaxIdCollection, TaxIdCollectionParams,
};
use super::line_item::{LineItem, ListLineItems};
use crate::request::{resource_path, ApiRequest};
use crate::types::common::{AutomaticTax, AutomaticTaxParams, Currency, Metadata};
use crate::types::related::Account;
use crate::types::{Expandable, List, ListParams};
use crate::Result;

pub use super::checkout_session::{
    BillingAddressCollection, CustomerCreation, PaymentMethodCollection, SubmitType,
};

const PATH: &str = "/v1/payment_links";

string_enum! {
    pub enum AfterCompletionType {
        HostedConfirmation => "hosted_confirmation",
        Redirect => "redirect",
    }
}

string_enum! {
    pub enum CaptureMethod {
        Automatic => "automatic",
        AutomaticAsync => "automatic_async",
        Manual => "manual",
    }
}

string_enum! {
    pub enum SetupFutureUsage {
        OffSession => "off_session",
        OnSession => "on_session",
    }
}

string_enum! {
    pub enum PaymentMethodType {
        Affirm => "affirm",
        AfterpayClearpay => "afterpay_clearpay",
        Alipay => "alipay",
        Alma => "alma",
        AuBecsDebit => "au_becs_debit",
        BacsDebit => "bacs_debit",
        Bancontact => "bancontact",
        Blik => "blik",
        Boleto => "boleto",
        Card => "card",
        Cashapp => "cashapp",
        Eps => "eps",
        Fpx => "fpx",
        Giropay => "giropay",
        Grabpay => "grabpay",
        Ideal => "ideal",
        Klarna => "klarna",
        Konbini => "konbini",
        Link => "link",
        Mobilepay => "mobilepay",
        Multibanco => "multibanco",
        Oxxo => "oxxo",
        P24 => "p24",
        PayByBank => "pay_by_bank",
        Paynow => "paynow",
        Paypal => "paypal",
        Pix => "pix",
        Promptpay => "promptpay",
        SepaDebit => "sepa_debit",
        Sofort => "sofort",
        Swish => "swish",
        Twint => "twint",
        UsBankAccount => "us_bank_account",
        WechatPay => "wechat_pay",
        Zip => "zip",
    }
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct HostedConfirmation {
    pub custom_message: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Redirect {
    pub url: String,
}

/// What the customer sees once the purchase completes.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct AfterCompletion {
    pub hosted_confirmation: Option<HostedConfirmation>,
    pub redirect: Option<Redirect>,
    #[serde(rename = "type")]
    pub type_: Option<AfterCompletionType>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct CompletedSessions {
    pub count: u64,
    pub limit: u64,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Restrictions {
    pub completed_sessions: Option<CompletedSessions>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct PaymentIntentData {
    pub capture_method: Option<CaptureMethod>,
    pub description: Option<String>,
    pub metadata: Option<Metadata>,
    pub setup_future_usage: Option<SetupFutureUsage>,
    pub statement_descriptor: Option<String>,
    pub statement_descriptor_suffix: Option<String>,
    pub transfer_group: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct SubscriptionData {
    pub description: Option<String>,
    pub metadata: Option<Metadata>,
    pub trial_period_days: Option<u64>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct TransferData {
    pub amount: Option<i64>,
    pub destination: Option<Expandable<Account>>,
}

/// A shareable, reusable URL that opens a Checkout page.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct PaymentLink {
    pub id: String,
    pub object: String,
    pub active: bool,
    pub after_completion: Option<AfterCompletion>,
    pub allow_promotion_codes: bool,
    pub application: Option<Expandable<Application>>,
    pub application_fee_amount: Option<i64>,
    pub application_fee_percent: Option<f64>,
    pub automatic_tax: Option<AutomaticTax>,
    pub billing_address_collection: Option<BillingAddressCollection>,
    pub consent_collection: Option<ConsentCollection>,
    pub currency: Option<Currency>,
    pub customer_creation: Option<CustomerCreation>,
    pub inactive_message: Option<String>,
    pub line_items: Option<List<LineItem>>,
    pub livemode: bool,
    pub metadata: Option<Metadata>,
    pub on_behalf_of: Option<Expandable<Account>>,
    pub payment_intent_data: Option<PaymentIntentData>,
    pub payment_method_collection: Option<PaymentMethodCollection>,
    pub payment_method_types: Option<Vec<PaymentMethodType>>,
    pub phone_number_collection: Option<PhoneNumberCollection>,
    pub restrictions: Option<Restrictions>,
    pub shipping_address_collection: Option<ShippingAddressCollection>,
    pub shipping_options: Vec<ShippingOption>,
    pub submit_type: Option<SubmitType>,
    pub subscription_data: Option<SubscriptionData>,
    pub tax_id_collection: Option<TaxIdCollection>,
    pub transfer_data: Option<TransferData>,
    pub url: String,
}

impl_object!(PaymentLink, "payment_link");

impl PaymentLink {
    pub fn create(params: &CreatePaymentLink) -> Result<ApiRequest> {
        ApiRequest::post(PATH).with_params(params)
    }

    pub fn retrieve(id: &str) -> ApiRequest {
        ApiRequest::get(resource_path(PATH, id, None))
    }

    pub fn update(id: &str, params: &UpdatePaymentLink) -> Result<ApiRequest> {
        ApiRequest::post(resource_path(PATH, id, None)).with_params(params)
    }

    pub fn list(params: &ListPaymentLinks) -> Result<ApiRequest> {
        ApiRequest::get(PATH).with_params(params)
    }

    pub fn list_line_items(id: &str, params: &ListLineItems) -> Result<ApiRequest> {
        ApiRequest::get(resource_path(PATH, id, Some("line_items"))).with_params(params)
    }
}

#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct HostedConfirmationParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_message: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct RedirectParams {
    pub url: String,
}

#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct AfterCompletionParams {
    #[serde(rename = "type")]
    pub type_: Option<AfterCompletionType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hosted_confirmation: Option<HostedConfirmationParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect: Option<RedirectParams>,
}

impl AfterCompletionParams {
    pub fn redirect(url: impl Into<String>) -> Self {
        AfterCompletionParams {
            type_: Some(AfterCompletionType::Redirect),
            redirect: Some(RedirectParams { url: url.into() }),
            ..Default::default()
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct PaymentLinkLineItem {
    pub price: String,
    pub quantity: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adjustable_quantity: Option<AdjustableQuantity>,
}

/// Line item changes on update reference existing items by `id`.
#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct UpdateLineItem {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adjustable_quantity: Option<AdjustableQuantity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u64>,
}

#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct PaymentIntentDataParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capture_method: Option<CaptureMethod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub setup_future_usage: Option<SetupFutureUsage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statement_descriptor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statement_descriptor_suffix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transfer_group: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct CompletedSessionsParams {
    pub limit: u64,
}

#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct RestrictionsParams {
    pub completed_sessions: CompletedSessionsParams,
}

#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct SubscriptionDataParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trial_period_days: Option<u64>,
}

#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct TransferDataParams {
    pub destination: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
}

#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct CreatePaymentLink {
    pub line_items: Vec<PaymentLinkLineItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after_completion: Option<AfterCompletionParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_promotion_codes: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_fee_amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_fee_percent: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub automatic_tax: Option<AutomaticTaxParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address_collection: Option<BillingAddressCollection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consent_collection: Option<ConsentCollectionParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_creation: Option<CustomerCreation>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub expand: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inactive_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_behalf_of: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_intent_data: Option<PaymentIntentDataParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method_collection: Option<PaymentMethodCollection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method_types: Option<Vec<PaymentMethodType>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number_collection: Option<EnabledParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restrictions: Option<RestrictionsParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address_collection: Option<ShippingAddressCollectionParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_options: Option<Vec<ShippingOptionParams>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submit_type: Option<SubmitType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_data: Option<SubscriptionDataParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_id_collection: Option<TaxIdCollectionParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transfer_data: Option<TransferDataParams>,
}

impl CreatePaymentLink {
    pub fn new(line_items: Vec<PaymentLinkLineItem>) -> Self {
        CreatePaymentLink {
            line_items,
            ..Default::default()
        }
    }
}

/// `Some("")` on the string fields clears them; `Some(vec![])` on
/// `payment_method_types` resets to the dashboard defaults.
#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct UpdatePaymentLink {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after_completion: Option<AfterCompletionParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_promotion_codes: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub automatic_tax: Option<AutomaticTaxParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address_collection: Option<BillingAddressCollection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_creation: Option<CustomerCreation>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub expand: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inactive_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_items: Option<Vec<UpdateLineItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method_collection: Option<PaymentMethodCollection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method_types: Option<Vec<PaymentMethodType>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restrictions: Option<RestrictionsParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address_collection: Option<ShippingAddressCollectionParams>,
}

#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct ListPaymentLinks {
    #[serde(flatten)]
    pub list: ListParams,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub expand: Vec<String>,
}

impl_expand!(CreatePaymentLink, UpdatePaymentLink, ListPaymentLinks);
impl_metadata!(CreatePaymentLink, UpdatePaymentLink);
