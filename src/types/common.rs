use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::Expandable;
use crate::types::related::{Account, Discount, TaxRate};

/// Arbitrary key/value pairs attached to most Stripe objects.
pub type Metadata = HashMap<String, String>;

/// Unix timestamp in seconds, as Stripe sends it.
pub type Timestamp = i64;

pub fn timestamp_to_datetime(timestamp: Timestamp) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(timestamp, 0)
}

/// Three-letter ISO currency code, always stored lowercase.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Currency(String);

impl Currency {
    pub fn new(code: &str) -> Self {
        Currency(code.to_ascii_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Currency {
    fn from(code: &str) -> Self {
        Currency::new(code)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Currency {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Ok(Currency::new(&code))
    }
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Address {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ShippingDetails {
    pub address: Option<Address>,
    pub name: Option<String>,
}

string_enum! {
    pub enum TaxBehavior {
        Exclusive => "exclusive",
        Inclusive => "inclusive",
        Unspecified => "unspecified",
    }
}

string_enum! {
    pub enum RecurringInterval {
        Day => "day",
        Week => "week",
        Month => "month",
        Year => "year",
    }
}

string_enum! {
    pub enum AutomaticTaxStatus {
        Complete => "complete",
        Failed => "failed",
        RequiresLocationInputs => "requires_location_inputs",
    }
}

string_enum! {
    pub enum LiabilityType {
        Account => "account",
        Self_ => "self",
    }
}

string_enum! {
    pub enum TaxabilityReason {
        CustomerExempt => "customer_exempt",
        NotCollecting => "not_collecting",
        NotSubjectToTax => "not_subject_to_tax",
        NotSupported => "not_supported",
        PortionProductExempt => "portion_product_exempt",
        PortionReducedRated => "portion_reduced_rated",
        PortionStandardRated => "portion_standard_rated",
        ProductExempt => "product_exempt",
        ProductExemptHoliday => "product_exempt_holiday",
        ProportionallyRated => "proportionally_rated",
        ReducedRated => "reduced_rated",
        ReverseCharge => "reverse_charge",
        StandardRated => "standard_rated",
        TaxableBasisReduced => "taxable_basis_reduced",
        ZeroRated => "zero_rated",
    }
}

/// The account responsible for tax, on automatic tax and invoice settings.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct AutomaticTaxLiability {
    pub account: Option<Expandable<Account>>,
    #[serde(rename = "type")]
    pub type_: Option<LiabilityType>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct AutomaticTax {
    pub enabled: bool,
    pub liability: Option<AutomaticTaxLiability>,
    pub status: Option<AutomaticTaxStatus>,
}

/// Liability parameter shared by automatic tax and invoice settings.
#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct LiabilityParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<LiabilityType>,
}

#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct AutomaticTaxParams {
    pub enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub liability: Option<LiabilityParams>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct TotalDetailsBreakdownDiscount {
    pub amount: i64,
    pub discount: Option<Discount>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct TotalDetailsBreakdownTax {
    pub amount: i64,
    pub rate: Option<TaxRate>,
    pub taxability_reason: Option<TaxabilityReason>,
    pub taxable_amount: Option<i64>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct TotalDetailsBreakdown {
    pub discounts: Vec<TotalDetailsBreakdownDiscount>,
    pub taxes: Vec<TotalDetailsBreakdownTax>,
}

/// Discount, shipping and tax totals. `breakdown` only appears when expanded.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct TotalDetails {
    pub amount_discount: i64,
    pub amount_shipping: Option<i64>,
    pub amount_tax: i64,
    pub breakdown: Option<TotalDetailsBreakdown>,
}

/// Discount reference on a line item or session: a coupon, a promotion
/// code, or an applied discount object.
#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct DiscountParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coupon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promotion_code: Option<String>,
}

impl DiscountParams {
    pub fn coupon(coupon: impl Into<String>) -> Self {
        DiscountParams {
            coupon: Some(coupon.into()),
            ..Default::default()
        }
    }

    pub fn promotion_code(code: impl Into<String>) -> Self {
        DiscountParams {
            promotion_code: Some(code.into()),
            ..Default::default()
        }
    }
}
