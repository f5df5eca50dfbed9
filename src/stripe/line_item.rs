use serde::{Deserialize, Serialize};

use super::price::Price;
use crate::types::common::{Currency, TaxabilityReason};
use crate::types::related::{Discount, TaxRate};
use crate::types::ListParams;

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct LineItemDiscount {
    pub amount: i64,
    pub discount: Option<Discount>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct LineItemTax {
    pub amount: i64,
    pub rate: Option<TaxRate>,
    pub taxability_reason: Option<TaxabilityReason>,
    pub taxable_amount: Option<i64>,
}

/// A purchased item on a checkout session, payment link or quote.
///
/// `price` is always inline; Stripe never sends it as a bare ID here.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct LineItem {
    pub id: String,
    pub object: String,
    pub amount_discount: i64,
    pub amount_subtotal: i64,
    pub amount_tax: i64,
    pub amount_total: i64,
    pub currency: Currency,
    pub description: Option<String>,
    pub discounts: Option<Vec<LineItemDiscount>>,
    pub price: Option<Price>,
    pub quantity: Option<u64>,
    pub taxes: Option<Vec<LineItemTax>>,
}

impl_object!(LineItem, "item");

/// Parameters for the `.../line_items` sub-list endpoints.
#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct ListLineItems {
    #[serde(flatten)]
    pub list: ListParams,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub expand: Vec<String>,
}

impl_expand!(ListLineItems);
