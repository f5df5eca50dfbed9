use std::collections::HashMap;

use serde::{Deserialize, Serialize, Serializer};

use crate::request::{resource_path, ApiRequest};
use crate::types::common::{Currency, Metadata, RecurringInterval, TaxBehavior};
use crate::types::related::Product;
use crate::types::{decimal, CreatedFilter, Expandable, ListParams, SearchParams};
use crate::Result;

const PATH: &str = "/v1/prices";

string_enum! {
    pub enum BillingScheme {
        PerUnit => "per_unit",
        Tiered => "tiered",
    }
}

string_enum! {
    pub enum AggregateUsage {
        LastDuringPeriod => "last_during_period",
        LastEver => "last_ever",
        Max => "max",
        Sum => "sum",
    }
}

string_enum! {
    pub enum UsageType {
        Licensed => "licensed",
        Metered => "metered",
    }
}

string_enum! {
    pub enum TiersMode {
        Graduated => "graduated",
        Volume => "volume",
    }
}

string_enum! {
    pub enum TransformQuantityRound {
        Down => "down",
        Up => "up",
    }
}

string_enum! {
    pub enum PriceType {
        OneTime => "one_time",
        Recurring => "recurring",
    }
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct CustomUnitAmount {
    pub maximum: Option<i64>,
    pub minimum: Option<i64>,
    pub preset: Option<i64>,
}

/// One pricing tier. `up_to` is `None` for the final, unbounded tier.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct PriceTier {
    pub flat_amount: Option<i64>,
    #[serde(with = "decimal::option")]
    pub flat_amount_decimal: Option<f64>,
    pub unit_amount: Option<i64>,
    #[serde(with = "decimal::option")]
    pub unit_amount_decimal: Option<f64>,
    pub up_to: Option<i64>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct CurrencyOption {
    pub custom_unit_amount: Option<CustomUnitAmount>,
    pub tax_behavior: Option<TaxBehavior>,
    pub tiers: Option<Vec<PriceTier>>,
    pub unit_amount: Option<i64>,
    #[serde(with = "decimal::option")]
    pub unit_amount_decimal: Option<f64>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Recurring {
    pub aggregate_usage: Option<AggregateUsage>,
    pub interval: Option<RecurringInterval>,
    pub interval_count: u64,
    pub meter: Option<String>,
    pub trial_period_days: Option<u64>,
    pub usage_type: Option<UsageType>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct TransformQuantity {
    pub divide_by: i64,
    pub round: Option<TransformQuantityRound>,
}

/// How much and how often to charge for a product.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Price {
    pub id: String,
    pub object: String,
    pub active: bool,
    pub billing_scheme: Option<BillingScheme>,
    pub created: i64,
    pub currency: Currency,
    pub currency_options: Option<HashMap<String, CurrencyOption>>,
    pub custom_unit_amount: Option<CustomUnitAmount>,
    pub deleted: bool,
    pub livemode: bool,
    pub lookup_key: Option<String>,
    pub metadata: Metadata,
    pub nickname: Option<String>,
    pub product: Option<Expandable<Product>>,
    pub recurring: Option<Recurring>,
    pub tax_behavior: Option<TaxBehavior>,
    pub tiers: Option<Vec<PriceTier>>,
    pub tiers_mode: Option<TiersMode>,
    pub transform_quantity: Option<TransformQuantity>,
    #[serde(rename = "type")]
    pub type_: Option<PriceType>,
    pub unit_amount: Option<i64>,
    #[serde(with = "decimal::option")]
    pub unit_amount_decimal: Option<f64>,
}

impl_object!(Price, "price");

impl Price {
    pub fn is_recurring(&self) -> bool {
        self.recurring.is_some() || self.type_ == Some(PriceType::Recurring)
    }

    pub fn create(params: &CreatePrice) -> Result<ApiRequest> {
        ApiRequest::post(PATH).with_params(params)
    }

    pub fn retrieve(id: &str) -> ApiRequest {
        ApiRequest::get(resource_path(PATH, id, None))
    }

    pub fn update(id: &str, params: &UpdatePrice) -> Result<ApiRequest> {
        ApiRequest::post(resource_path(PATH, id, None)).with_params(params)
    }

    pub fn list(params: &ListPrices) -> Result<ApiRequest> {
        ApiRequest::get(PATH).with_params(params)
    }

    /// Uses Stripe's search query language, e.g. `active:'true' AND metadata['order_id']:'6735'`.
    pub fn search(params: &SearchPrices) -> Result<ApiRequest> {
        ApiRequest::get(format!("{}/search", PATH)).with_params(params)
    }
}

/// Upper bound of a tier: a quantity, or `inf` for the last tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpTo {
    Inf,
    Value(i64),
}

impl Serialize for UpTo {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            UpTo::Inf => serializer.serialize_str("inf"),
            UpTo::Value(value) => serializer.serialize_i64(*value),
        }
    }
}

impl From<i64> for UpTo {
    fn from(value: i64) -> Self {
        UpTo::Value(value)
    }
}

#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct TierParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flat_amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flat_amount_decimal: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_amount_decimal: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub up_to: Option<UpTo>,
}

#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct CustomUnitAmountParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preset: Option<i64>,
}

#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct CurrencyOptionParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_unit_amount: Option<CustomUnitAmountParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_behavior: Option<TaxBehavior>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tiers: Option<Vec<TierParams>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_amount_decimal: Option<f64>,
}

/// Inline product created alongside the price.
#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct ProductData {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statement_descriptor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_label: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct RecurringParams {
    pub interval: Option<RecurringInterval>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aggregate_usage: Option<AggregateUsage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trial_period_days: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_type: Option<UsageType>,
}

impl RecurringParams {
    pub fn every(interval: RecurringInterval) -> Self {
        RecurringParams {
            interval: Some(interval),
            ..Default::default()
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct TransformQuantityParams {
    pub divide_by: i64,
    pub round: Option<TransformQuantityRound>,
}

#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct CreatePrice {
    pub currency: Option<Currency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_scheme: Option<BillingScheme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_options: Option<HashMap<String, CurrencyOptionParams>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_unit_amount: Option<CustomUnitAmountParams>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub expand: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lookup_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_data: Option<ProductData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurring: Option<RecurringParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_behavior: Option<TaxBehavior>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tiers: Option<Vec<TierParams>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tiers_mode: Option<TiersMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transfer_lookup_key: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transform_quantity: Option<TransformQuantityParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_amount_decimal: Option<f64>,
}

impl CreatePrice {
    pub fn new(currency: &str) -> Self {
        CreatePrice {
            currency: Some(Currency::new(currency)),
            ..Default::default()
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct UpdatePrice {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_options: Option<HashMap<String, CurrencyOptionParams>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub expand: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lookup_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_behavior: Option<TaxBehavior>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transfer_lookup_key: Option<bool>,
}

#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct ListPricesRecurring {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<RecurringInterval>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_type: Option<UsageType>,
}

#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct ListPrices {
    #[serde(flatten)]
    pub list: ListParams,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<CreatedFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub expand: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lookup_keys: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurring: Option<ListPricesRecurring>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<PriceType>,
}

#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct SearchPrices {
    #[serde(flatten)]
    pub search: SearchParams,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub expand: Vec<String>,
}

impl SearchPrices {
    pub fn new(query: impl Into<String>) -> Self {
        SearchPrices {
            search: SearchParams {
                query: query.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

impl_expand!(CreatePrice, UpdatePrice, ListPrices, SearchPrices);
impl_metadata!(CreatePrice, UpdatePrice, ProductData);

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::form;

    #[test]
    fn tiers_encode_inf_as_a_string() {
        let params = CreatePrice {
            product: Some("prod_1".into()),
            billing_scheme: Some(BillingScheme::Tiered),
            tiers_mode: Some(TiersMode::Graduated),
            recurring: Some(RecurringParams::every(RecurringInterval::Month)),
            tiers: Some(vec![
                TierParams {
                    unit_amount: Some(1000),
                    up_to: Some(UpTo::Value(5)),
                    ..Default::default()
                },
                TierParams {
                    unit_amount_decimal: Some(750.5),
                    up_to: Some(UpTo::Inf),
                    ..Default::default()
                },
            ]),
            ..CreatePrice::new("USD")
        };
        assert_eq!(
            form::to_string(&params).unwrap(),
            "currency=usd&billing_scheme=tiered&product=prod_1&recurring[interval]=month\
             &tiers[0][unit_amount]=1000&tiers[0][up_to]=5\
             &tiers[1][unit_amount_decimal]=750.5&tiers[1][up_to]=inf&tiers_mode=graduated"
        );
    }

    #[test]
    fn decimal_fields_decode_from_strings() {
        let price: Price = serde_json::from_str(
            r#"{"id":"price_1","object":"price","currency":"usd","unit_amount":null,
                "unit_amount_decimal":"0.25","tiers":[{"up_to":null,"unit_amount_decimal":"1.5"}]}"#,
        )
        .unwrap();
        assert_eq!(price.unit_amount_decimal, Some(0.25));
        let tiers = price.tiers.unwrap();
        assert_eq!(tiers[0].up_to, None);
        assert_eq!(tiers[0].unit_amount_decimal, Some(1.5));
    }
}
