use serde::{Deserialize, Serialize};

use super::related::Customer;
use super::{Expandable, List};
use crate::stripe::price::Price;

string_enum! {
    pub enum SubscriptionStatus {
        Active => "active",
        Canceled => "canceled",
        Incomplete => "incomplete",
        IncompleteExpired => "incomplete_expired",
        PastDue => "past_due",
        Paused => "paused",
        Trialing => "trialing",
        Unpaid => "unpaid",
    }
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Subscription {
    pub id: String,
    pub object: String,
    pub status: Option<SubscriptionStatus>,
    pub customer: Option<Expandable<Customer>>,
    pub current_period_start: i64,
    pub current_period_end: i64,
    pub cancel_at_period_end: bool,
    pub items: List<SubscriptionItem>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct SubscriptionItem {
    pub id: String,
    pub object: String,
    pub price: Option<Price>,
    pub quantity: Option<u64>,
}

impl_object!(Subscription, "subscription");
impl_object!(SubscriptionItem, "subscription_item");

impl Subscription {
    pub fn is_active(&self) -> bool {
        matches!(
            self.status,
            Some(SubscriptionStatus::Active) | Some(SubscriptionStatus::Trialing)
        )
    }

    /// Price IDs across all items, in item order.
    pub fn price_ids(&self) -> Vec<&str> {
        self.items
            .data
            .iter()
            .filter_map(|item| item.price.as_ref())
            .map(|price| price.id.as_str())
            .collect()
    }
}
