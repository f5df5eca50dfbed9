//! Objects the covered resources point at. Only the identifying fields are
//! modelled; anything else Stripe sends is ignored on decode.

use serde::{Deserialize, Serialize};

use super::common::{Currency, Metadata};
use super::Expandable;

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Account {
    pub id: String,
    pub object: String,
    pub business_type: Option<String>,
    pub country: Option<String>,
    pub email: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Customer {
    pub id: String,
    pub object: String,
    pub email: Option<String>,
    pub name: Option<String>,
    pub livemode: bool,
    pub metadata: Option<Metadata>,
    pub deleted: bool,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Product {
    pub id: String,
    pub object: String,
    pub active: bool,
    pub name: String,
    pub description: Option<String>,
    pub metadata: Option<Metadata>,
    pub deleted: bool,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Invoice {
    pub id: String,
    pub object: String,
    pub customer: Option<Expandable<Customer>>,
    pub number: Option<String>,
    pub status: Option<String>,
    pub total: i64,
    pub currency: Option<Currency>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct PaymentIntent {
    pub id: String,
    pub object: String,
    pub amount: i64,
    pub currency: Option<Currency>,
    pub status: Option<String>,
    pub client_secret: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct SetupIntent {
    pub id: String,
    pub object: String,
    pub status: Option<String>,
    pub client_secret: Option<String>,
    pub usage: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Coupon {
    pub id: String,
    pub object: String,
    pub name: Option<String>,
    pub amount_off: Option<i64>,
    pub percent_off: Option<f64>,
    pub currency: Option<Currency>,
    pub duration: Option<String>,
    pub valid: bool,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct PromotionCode {
    pub id: String,
    pub object: String,
    pub code: String,
    pub active: bool,
    pub coupon: Option<Coupon>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Discount {
    pub id: String,
    pub object: String,
    pub coupon: Option<Coupon>,
    pub customer: Option<Expandable<Customer>>,
    pub promotion_code: Option<Expandable<PromotionCode>>,
    pub start: i64,
    pub end: Option<i64>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct TaxRate {
    pub id: String,
    pub object: String,
    pub display_name: String,
    pub percentage: f64,
    pub inclusive: bool,
    pub jurisdiction: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ShippingRate {
    pub id: String,
    pub object: String,
    pub active: bool,
    pub display_name: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct SubscriptionSchedule {
    pub id: String,
    pub object: String,
    pub status: Option<String>,
    pub customer: Option<Expandable<Customer>>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct TestClock {
    pub id: String,
    pub object: String,
    pub frozen_time: i64,
    pub name: Option<String>,
}

impl_object!(Account, "account");
impl_object!(Customer, "customer");
impl_object!(Product, "product");
impl_object!(Invoice, "invoice");
impl_object!(PaymentIntent, "payment_intent");
impl_object!(SetupIntent, "setup_intent");
impl_object!(Coupon, "coupon");
impl_object!(PromotionCode, "promotion_code");
impl_object!(Discount, "discount");
impl_object!(TaxRate, "tax_rate");
impl_object!(ShippingRate, "shipping_rate");
impl_object!(SubscriptionSchedule, "subscription_schedule");
impl_object!(TestClock, "test_clock");
