use serde::{Deserialize, Serialize, Serializer};

use super::application::Application;
use super::line_item::{LineItem, ListLineItems};
use super::price::RecurringParams;
use crate::request::{resource_path, ApiRequest};
use crate::types::common::{
    AutomaticTax, AutomaticTaxParams, Currency, DiscountParams, LiabilityParams, LiabilityType,
    Metadata, RecurringInterval, TaxBehavior, TotalDetails,
};
use crate::types::related::{Account, Customer, Discount, Invoice, SubscriptionSchedule, TaxRate, TestClock};
use crate::types::subscription::Subscription;
use crate::types::{Expandable, List, ListParams};
use crate::Result;

const PATH: &str = "/v1/quotes";

string_enum! {
    pub enum QuoteStatus {
        Accepted => "accepted",
        Canceled => "canceled",
        Draft => "draft",
        Open => "open",
    }
}

string_enum! {
    pub enum CollectionMethod {
        ChargeAutomatically => "charge_automatically",
        SendInvoice => "send_invoice",
    }
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ComputedRecurring {
    pub amount_subtotal: i64,
    pub amount_total: i64,
    pub interval: Option<RecurringInterval>,
    pub interval_count: u64,
    pub total_details: Option<TotalDetails>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ComputedUpfront {
    pub amount_subtotal: i64,
    pub amount_total: i64,
    pub line_items: Option<List<LineItem>>,
    pub total_details: Option<TotalDetails>,
}

/// Totals Stripe works out once the quote is accepted: what is charged
/// upfront and, for subscriptions, on every renewal.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Computed {
    pub recurring: Option<ComputedRecurring>,
    pub upfront: Option<ComputedUpfront>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct FromQuote {
    pub is_revision: bool,
    pub quote: Option<Expandable<Quote>>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct InvoiceIssuer {
    pub account: Option<Expandable<Account>>,
    #[serde(rename = "type")]
    pub type_: Option<LiabilityType>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct InvoiceSettings {
    pub days_until_due: Option<u64>,
    pub issuer: Option<InvoiceIssuer>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct StatusTransitions {
    pub accepted_at: Option<i64>,
    pub canceled_at: Option<i64>,
    pub finalized_at: Option<i64>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct SubscriptionData {
    pub description: Option<String>,
    pub effective_date: Option<i64>,
    pub metadata: Option<Metadata>,
    pub trial_period_days: Option<u64>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct TransferData {
    pub amount: Option<i64>,
    pub amount_percent: Option<f64>,
    pub destination: Option<Expandable<Account>>,
}

/// A priced offer sent to a customer, converted into an invoice or
/// subscription on acceptance.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Quote {
    pub id: String,
    pub object: String,
    pub amount_subtotal: i64,
    pub amount_total: i64,
    pub application: Option<Expandable<Application>>,
    pub application_fee_amount: Option<i64>,
    pub application_fee_percent: Option<f64>,
    pub automatic_tax: Option<AutomaticTax>,
    pub collection_method: Option<CollectionMethod>,
    pub computed: Option<Computed>,
    pub created: i64,
    pub currency: Option<Currency>,
    pub customer: Option<Expandable<Customer>>,
    pub default_tax_rates: Option<Vec<Expandable<TaxRate>>>,
    pub description: Option<String>,
    pub discounts: Option<Vec<Expandable<Discount>>>,
    pub expires_at: i64,
    pub footer: Option<String>,
    pub from_quote: Option<FromQuote>,
    pub header: Option<String>,
    pub invoice: Option<Expandable<Invoice>>,
    pub invoice_settings: Option<InvoiceSettings>,
    pub line_items: Option<List<LineItem>>,
    pub livemode: bool,
    pub metadata: Option<Metadata>,
    pub number: Option<String>,
    pub on_behalf_of: Option<Expandable<Account>>,
    pub status: Option<QuoteStatus>,
    pub status_transitions: Option<StatusTransitions>,
    pub subscription: Option<Expandable<Subscription>>,
    pub subscription_data: Option<SubscriptionData>,
    pub subscription_schedule: Option<Expandable<SubscriptionSchedule>>,
    pub test_clock: Option<Expandable<TestClock>>,
    pub total_details: Option<TotalDetails>,
    pub transfer_data: Option<TransferData>,
}

impl_object!(Quote, "quote");

impl Quote {
    pub fn create(params: &CreateQuote) -> Result<ApiRequest> {
        ApiRequest::post(PATH).with_params(params)
    }

    pub fn retrieve(id: &str) -> ApiRequest {
        ApiRequest::get(resource_path(PATH, id, None))
    }

    pub fn update(id: &str, params: &UpdateQuote) -> Result<ApiRequest> {
        ApiRequest::post(resource_path(PATH, id, None)).with_params(params)
    }

    pub fn list(params: &ListQuotes) -> Result<ApiRequest> {
        ApiRequest::get(PATH).with_params(params)
    }

    pub fn accept(id: &str) -> ApiRequest {
        ApiRequest::post(resource_path(PATH, id, Some("accept")))
    }

    pub fn cancel(id: &str) -> ApiRequest {
        ApiRequest::post(resource_path(PATH, id, Some("cancel")))
    }

    /// Moves a draft quote to `open` so it can be sent and accepted.
    pub fn finalize(id: &str, params: &FinalizeQuote) -> Result<ApiRequest> {
        ApiRequest::post(resource_path(PATH, id, Some("finalize"))).with_params(params)
    }

    pub fn list_line_items(id: &str, params: &ListLineItems) -> Result<ApiRequest> {
        ApiRequest::get(resource_path(PATH, id, Some("line_items"))).with_params(params)
    }

    pub fn list_computed_upfront_line_items(id: &str, params: &ListLineItems) -> Result<ApiRequest> {
        ApiRequest::get(resource_path(PATH, id, Some("computed_upfront_line_items")))
            .with_params(params)
    }

    /// The quote rendered as a PDF; the body is binary, not JSON.
    pub fn pdf(id: &str) -> ApiRequest {
        ApiRequest::get(resource_path(PATH, id, Some("pdf"))).on_files_host()
    }
}

/// When a quote's subscription change takes effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EffectiveDate {
    CurrentPeriodEnd,
    Timestamp(i64),
}

impl Serialize for EffectiveDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            EffectiveDate::CurrentPeriodEnd => serializer.serialize_str("current_period_end"),
            EffectiveDate::Timestamp(timestamp) => serializer.serialize_i64(*timestamp),
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct FromQuoteParams {
    pub quote: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_revision: Option<bool>,
}

#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct InvoiceSettingsParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_until_due: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuer: Option<LiabilityParams>,
}

#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct QuotePriceData {
    pub currency: Currency,
    pub product: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurring: Option<RecurringParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_behavior: Option<TaxBehavior>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_amount_decimal: Option<f64>,
}

/// A line item on create or update. On update, items carrying an `id` are
/// kept and any existing item left out is removed.
#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct QuoteLineItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discounts: Option<Vec<DiscountParams>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_data: Option<QuotePriceData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_rates: Option<Vec<String>>,
}

#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct SubscriptionDataParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_date: Option<EffectiveDate>,
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
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_percent: Option<f64>,
}

#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct CreateQuote {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_fee_amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_fee_percent: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub automatic_tax: Option<AutomaticTaxParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_method: Option<CollectionMethod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_tax_rates: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discounts: Option<Vec<DiscountParams>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub expand: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_quote: Option<FromQuoteParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_settings: Option<InvoiceSettingsParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_items: Option<Vec<QuoteLineItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_behalf_of: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_data: Option<SubscriptionDataParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_clock: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transfer_data: Option<TransferDataParams>,
}

#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct UpdateQuote {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_fee_amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_fee_percent: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub automatic_tax: Option<AutomaticTaxParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_method: Option<CollectionMethod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_tax_rates: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discounts: Option<Vec<DiscountParams>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub expand: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_settings: Option<InvoiceSettingsParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_items: Option<Vec<QuoteLineItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_behalf_of: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_data: Option<SubscriptionDataParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transfer_data: Option<TransferDataParams>,
}

#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct ListQuotes {
    #[serde(flatten)]
    pub list: ListParams,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub expand: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<QuoteStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_clock: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct FinalizeQuote {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub expand: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<i64>,
}

impl_expand!(CreateQuote, UpdateQuote, ListQuotes, FinalizeQuote);
impl_metadata!(CreateQuote, UpdateQuote, SubscriptionDataParams);

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::form;
    use crate::request::Host;

    #[test]
    fn effective_date_encodes_keyword_or_timestamp() {
        let mut params = CreateQuote {
            customer: Some("cus_1".into()),
            subscription_data: Some(SubscriptionDataParams {
                effective_date: Some(EffectiveDate::CurrentPeriodEnd),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert_eq!(
            form::to_string(&params).unwrap(),
            "customer=cus_1&subscription_data[effective_date]=current_period_end"
        );

        if let Some(data) = params.subscription_data.as_mut() {
            data.effective_date = Some(EffectiveDate::Timestamp(1_735_689_600));
        }
        assert_eq!(
            form::to_string(&params).unwrap(),
            "customer=cus_1&subscription_data[effective_date]=1735689600"
        );
    }

    #[test]
    fn pdf_is_served_from_the_files_host() {
        let request = Quote::pdf("qt_123");
        assert_eq!(request.host, Host::Files);
        assert_eq!(request.path, "/v1/quotes/qt_123/pdf");
    }
}
