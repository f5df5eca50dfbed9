use serde::{Deserialize, Serialize};

use super::line_item::{LineItem, ListLineItems};
use super::payment_link::PaymentLink;
use super::price::RecurringParams;
use crate::request::{resource_path, ApiRequest};
use crate::types::common::{
    Address, AutomaticTax, AutomaticTaxParams, Currency, DiscountParams, Metadata,
    ShippingDetails, TaxBehavior, TaxabilityReason, TotalDetails,
};
use crate::types::related::{
    Coupon, Customer, Invoice, PaymentIntent, PromotionCode, SetupIntent, ShippingRate, TaxRate,
};
use crate::types::subscription::Subscription;
use crate::types::{CreatedFilter, Expandable, List, ListParams};
use crate::Result;

const PATH: &str = "/v1/checkout/sessions";

string_enum! {
    pub enum Mode {
        Payment => "payment",
        Setup => "setup",
        Subscription => "subscription",
    }
}

string_enum! {
    pub enum Status {
        Complete => "complete",
        Expired => "expired",
        Open => "open",
    }
}

string_enum! {
    pub enum PaymentStatus {
        NoPaymentRequired => "no_payment_required",
        Paid => "paid",
        Unpaid => "unpaid",
    }
}

string_enum! {
    pub enum UiMode {
        Embedded => "embedded",
        Hosted => "hosted",
    }
}

string_enum! {
    pub enum BillingAddressCollection {
        Auto => "auto",
        Required => "required",
    }
}

string_enum! {
    pub enum CustomerCreation {
        Always => "always",
        IfRequired => "if_required",
    }
}

string_enum! {
    pub enum SubmitType {
        Auto => "auto",
        Book => "book",
        Donate => "donate",
        Pay => "pay",
        Subscribe => "subscribe",
    }
}

string_enum! {
    pub enum PaymentMethodCollection {
        Always => "always",
        IfRequired => "if_required",
    }
}

string_enum! {
    pub enum RedirectOnCompletion {
        Always => "always",
        IfRequired => "if_required",
        Never => "never",
    }
}

string_enum! {
    pub enum TaxIdCollectionRequired {
        IfSupported => "if_supported",
        Never => "never",
    }
}

string_enum! {
    pub enum CustomerTaxExempt {
        Exempt => "exempt",
        None => "none",
        Reverse => "reverse",
    }
}

string_enum! {
    pub enum ConsentPromotions {
        Auto => "auto",
        None => "none",
        OptIn => "opt_in",
        OptOut => "opt_out",
    }
}

string_enum! {
    pub enum TermsOfService {
        Accepted => "accepted",
        None => "none",
        Required => "required",
    }
}

string_enum! {
    pub enum ReuseAgreementPosition {
        Auto => "auto",
        Hidden => "hidden",
    }
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct AfterExpirationRecovery {
    pub allow_promotion_codes: bool,
    pub enabled: bool,
    pub expires_at: Option<i64>,
    pub url: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct AfterExpiration {
    pub recovery: Option<AfterExpirationRecovery>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Consent {
    pub promotions: Option<ConsentPromotions>,
    pub terms_of_service: Option<TermsOfService>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct PaymentMethodReuseAgreement {
    pub position: Option<ReuseAgreementPosition>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ConsentCollection {
    pub payment_method_reuse_agreement: Option<PaymentMethodReuseAgreement>,
    pub promotions: Option<ConsentPromotions>,
    pub terms_of_service: Option<TermsOfService>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct CurrencyConversion {
    pub amount_subtotal: i64,
    pub amount_total: i64,
    #[serde(with = "crate::types::decimal::option")]
    pub fx_rate: Option<f64>,
    pub source_currency: Option<Currency>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct CustomerTaxId {
    #[serde(rename = "type")]
    pub type_: String,
    pub value: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct CustomerDetails {
    pub address: Option<Address>,
    pub email: Option<String>,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub tax_exempt: Option<CustomerTaxExempt>,
    pub tax_ids: Option<Vec<CustomerTaxId>>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct SessionDiscount {
    pub coupon: Option<Expandable<Coupon>>,
    pub promotion_code: Option<Expandable<PromotionCode>>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct PhoneNumberCollection {
    pub enabled: bool,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ShippingAddressCollection {
    pub allowed_countries: Vec<String>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ShippingCostTax {
    pub amount: i64,
    pub rate: Option<TaxRate>,
    pub taxability_reason: Option<TaxabilityReason>,
    pub taxable_amount: Option<i64>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ShippingCost {
    pub amount_subtotal: i64,
    pub amount_tax: i64,
    pub amount_total: i64,
    pub shipping_rate: Option<Expandable<ShippingRate>>,
    pub taxes: Option<Vec<ShippingCostTax>>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ShippingOption {
    pub shipping_amount: i64,
    pub shipping_rate: Option<Expandable<ShippingRate>>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct TaxIdCollection {
    pub enabled: bool,
    pub required: Option<TaxIdCollectionRequired>,
}

/// A customer's session as they pay through Checkout.
///
/// `line_items` is only present when requested with `expand[]=line_items`.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct CheckoutSession {
    pub id: String,
    pub object: String,
    pub after_expiration: Option<AfterExpiration>,
    pub allow_promotion_codes: Option<bool>,
    pub amount_subtotal: Option<i64>,
    pub amount_total: Option<i64>,
    pub automatic_tax: Option<AutomaticTax>,
    pub billing_address_collection: Option<BillingAddressCollection>,
    pub cancel_url: Option<String>,
    pub client_reference_id: Option<String>,
    pub client_secret: Option<String>,
    pub consent: Option<Consent>,
    pub consent_collection: Option<ConsentCollection>,
    pub created: i64,
    pub currency: Option<Currency>,
    pub currency_conversion: Option<CurrencyConversion>,
    pub customer: Option<Expandable<Customer>>,
    pub customer_creation: Option<CustomerCreation>,
    pub customer_details: Option<CustomerDetails>,
    pub customer_email: Option<String>,
    pub discounts: Option<Vec<SessionDiscount>>,
    pub expires_at: i64,
    pub invoice: Option<Expandable<Invoice>>,
    pub line_items: Option<List<LineItem>>,
    pub livemode: bool,
    pub locale: Option<String>,
    pub metadata: Option<Metadata>,
    pub mode: Option<Mode>,
    pub payment_intent: Option<Expandable<PaymentIntent>>,
    pub payment_link: Option<Expandable<PaymentLink>>,
    pub payment_method_collection: Option<PaymentMethodCollection>,
    pub payment_method_types: Vec<String>,
    pub payment_status: Option<PaymentStatus>,
    pub phone_number_collection: Option<PhoneNumberCollection>,
    pub recovered_from: Option<String>,
    pub redirect_on_completion: Option<RedirectOnCompletion>,
    pub return_url: Option<String>,
    pub setup_intent: Option<Expandable<SetupIntent>>,
    pub shipping_address_collection: Option<ShippingAddressCollection>,
    pub shipping_cost: Option<ShippingCost>,
    pub shipping_details: Option<ShippingDetails>,
    pub shipping_options: Vec<ShippingOption>,
    pub status: Option<Status>,
    pub submit_type: Option<SubmitType>,
    pub subscription: Option<Expandable<Subscription>>,
    pub success_url: Option<String>,
    pub tax_id_collection: Option<TaxIdCollection>,
    pub total_details: Option<TotalDetails>,
    pub ui_mode: Option<UiMode>,
    pub url: Option<String>,
}

impl_object!(CheckoutSession, "checkout.session");

impl CheckoutSession {
    pub fn is_paid(&self) -> bool {
        matches!(
            self.payment_status,
            Some(PaymentStatus::Paid) | Some(PaymentStatus::NoPaymentRequired)
        )
    }

    pub fn create(params: &CreateCheckoutSession) -> Result<ApiRequest> {
        ApiRequest::post(PATH).with_params(params)
    }

    pub fn retrieve(id: &str) -> ApiRequest {
        ApiRequest::get(resource_path(PATH, id, None))
    }

    pub fn update(id: &str, params: &UpdateCheckoutSession) -> Result<ApiRequest> {
        ApiRequest::post(resource_path(PATH, id, None)).with_params(params)
    }

    pub fn list(params: &ListCheckoutSessions) -> Result<ApiRequest> {
        ApiRequest::get(PATH).with_params(params)
    }

    /// Expires an open session so it can no longer be completed.
    pub fn expire(id: &str, params: &ExpireCheckoutSession) -> Result<ApiRequest> {
        ApiRequest::post(resource_path(PATH, id, Some("expire"))).with_params(params)
    }

    pub fn list_line_items(id: &str, params: &ListLineItems) -> Result<ApiRequest> {
        ApiRequest::get(resource_path(PATH, id, Some("line_items"))).with_params(params)
    }
}

#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct AdjustableQuantity {
    pub enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<u64>,
}

#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct LineItemProductData {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_code: Option<String>,
}

/// Ad hoc price for a line item, used instead of a saved `price` ID.
#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct LineItemPriceData {
    pub currency: Currency,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_data: Option<LineItemProductData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurring: Option<RecurringParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_behavior: Option<TaxBehavior>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_amount_decimal: Option<f64>,
}

#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct CheckoutLineItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adjustable_quantity: Option<AdjustableQuantity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dynamic_tax_rates: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_data: Option<LineItemPriceData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_rates: Option<Vec<String>>,
}

impl CheckoutLineItem {
    pub fn price(price: impl Into<String>, quantity: u64) -> Self {
        CheckoutLineItem {
            price: Some(price.into()),
            quantity: Some(quantity),
            ..Default::default()
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct RecoveryParams {
    pub enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_promotion_codes: Option<bool>,
}

#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct AfterExpirationParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recovery: Option<RecoveryParams>,
}

#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct ReuseAgreementParams {
    pub position: Option<ReuseAgreementPosition>,
}

#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct ConsentCollectionParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method_reuse_agreement: Option<ReuseAgreementParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promotions: Option<ConsentPromotions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terms_of_service: Option<TermsOfService>,
}

#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct EnabledParams {
    pub enabled: bool,
}

#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct TaxIdCollectionParams {
    pub enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<TaxIdCollectionRequired>,
}

#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct ShippingAddressCollectionParams {
    pub allowed_countries: Vec<String>,
}

#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct ShippingOptionParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_rate: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct PaymentIntentDataParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capture_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_behalf_of: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub setup_future_usage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statement_descriptor: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct SubscriptionDataParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_tax_rates: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_behalf_of: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trial_end: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trial_period_days: Option<u64>,
}

#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct CreateCheckoutSession {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after_expiration: Option<AfterExpirationParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_promotion_codes: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub automatic_tax: Option<AutomaticTaxParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address_collection: Option<BillingAddressCollection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancel_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_reference_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consent_collection: Option<ConsentCollectionParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_creation: Option<CustomerCreation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discounts: Option<Vec<DiscountParams>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub expand: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_items: Option<Vec<CheckoutLineItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<Mode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_intent_data: Option<PaymentIntentDataParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method_collection: Option<PaymentMethodCollection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method_types: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number_collection: Option<EnabledParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_on_completion: Option<RedirectOnCompletion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address_collection: Option<ShippingAddressCollectionParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_options: Option<Vec<ShippingOptionParams>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submit_type: Option<SubmitType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_data: Option<SubscriptionDataParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_id_collection: Option<TaxIdCollectionParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ui_mode: Option<UiMode>,
}

impl CreateCheckoutSession {
    pub fn new(mode: Mode) -> Self {
        CreateCheckoutSession {
            mode: Some(mode),
            ..Default::default()
        }
    }

    pub fn add_line_item(&mut self, item: CheckoutLineItem) -> &mut Self {
        self.line_items.get_or_insert_with(Vec::new).push(item);
        self
    }
}

/// Only metadata and shipping options can change after creation.
#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct UpdateCheckoutSession {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub expand: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_options: Option<Vec<ShippingOptionParams>>,
}

#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct ListCustomerDetails {
    pub email: String,
}

#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct ListCheckoutSessions {
    #[serde(flatten)]
    pub list: ListParams,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<CreatedFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_details: Option<ListCustomerDetails>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub expand: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_intent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct ExpireCheckoutSession {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub expand: Vec<String>,
}

impl_expand!(
    CreateCheckoutSession,
    UpdateCheckoutSession,
    ListCheckoutSessions,
    ExpireCheckoutSession,
);
impl_metadata!(CreateCheckoutSession, UpdateCheckoutSession);
