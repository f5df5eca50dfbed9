use pretty_assertions::assert_eq;
use stripe_resources::stripe::billing_portal::configuration::{CancelMode, CustomerUpdateAllowed};
use stripe_resources::stripe::billing_portal::{Configuration, FlowType, Session};
use stripe_resources::stripe::checkout_session::{Mode, PaymentStatus};
use stripe_resources::stripe::payment_link::AfterCompletionType;
use stripe_resources::stripe::quote::QuoteStatus;
use stripe_resources::stripe::{CheckoutSession, LineItem, PaymentLink, Price, Quote};
use stripe_resources::types::common::Currency;
use stripe_resources::{Expandable, List, Method, Object};

const CHECKOUT_SESSION: &str = r#"{
  "id": "cs_test_a1",
  "object": "checkout.session",
  "amount_subtotal": 3000,
  "amount_total": 3000,
  "automatic_tax": {"enabled": false, "liability": null, "status": null},
  "created": 1700000000,
  "currency": "usd",
  "customer": {"id": "cus_1", "object": "customer", "email": "jenny@example.com"},
  "customer_details": {"email": "jenny@example.com", "address": null, "tax_exempt": "none", "tax_ids": []},
  "expires_at": 1700086400,
  "invoice": null,
  "line_items": {
    "object": "list",
    "data": [{
      "id": "li_1",
      "object": "item",
      "amount_discount": 0,
      "amount_subtotal": 3000,
      "amount_tax": 0,
      "amount_total": 3000,
      "currency": "usd",
      "description": "T-shirt",
      "price": {
        "id": "price_1",
        "object": "price",
        "currency": "usd",
        "product": "prod_1",
        "type": "one_time",
        "unit_amount": 1500,
        "unit_amount_decimal": "1500"
      },
      "quantity": 2
    }],
    "has_more": false,
    "url": "/v1/checkout/sessions/cs_test_a1/line_items"
  },
  "livemode": false,
  "metadata": {"order": "42"},
  "mode": "payment",
  "payment_intent": "pi_1",
  "payment_link": null,
  "payment_method_types": ["card"],
  "payment_status": "paid",
  "shipping_options": [],
  "status": "complete",
  "subscription": null,
  "success_url": "https://example.com/success",
  "total_details": {"amount_discount": 0, "amount_shipping": 0, "amount_tax": 0},
  "url": null
}"#;

#[test]
fn checkout_session_decodes_expanded_and_bare_references() {
    let session: CheckoutSession = serde_json::from_str(CHECKOUT_SESSION).unwrap();
    assert!(session.is_paid());
    assert_eq!(session.mode, Some(Mode::Payment));
    assert_eq!(session.payment_status, Some(PaymentStatus::Paid));

    let customer = session.customer.as_ref().unwrap();
    assert!(customer.is_object());
    assert_eq!(customer.id(), "cus_1");
    assert_eq!(
        customer.as_object().and_then(|c| c.email.as_deref()),
        Some("jenny@example.com")
    );

    let payment_intent = session.payment_intent.clone().unwrap();
    assert!(!payment_intent.is_object());
    assert_eq!(payment_intent.into_resolved().id, "pi_1");
    assert!(session.invoice.is_none());

    let items = session.line_items.as_ref().unwrap();
    assert_eq!(items.data.len(), 1);
    let price = items.data[0].price.as_ref().unwrap();
    assert_eq!(price.unit_amount_decimal, Some(1500.0));
    assert_eq!(price.product.as_ref().map(Expandable::id), Some("prod_1"));
}

#[test]
fn unknown_enum_values_survive_decode_and_encode() {
    let body = CHECKOUT_SESSION.replace(r#""mode": "payment""#, r#""mode": "installments""#);
    let session: CheckoutSession = serde_json::from_str(&body).unwrap();
    assert_eq!(session.mode.as_ref().map(|mode| mode.as_str()), Some("installments"));
    assert_eq!(
        serde_json::to_value(&session).unwrap()["mode"],
        serde_json::json!("installments")
    );
}

#[test]
fn line_item_pages_expose_the_next_cursor() {
    let page: List<LineItem> = serde_json::from_str(
        r#"{"object":"list","has_more":true,"url":"/v1/quotes/qt_1/line_items",
            "data":[{"id":"li_1","object":"item","currency":"eur","quantity":1},
                    {"id":"li_2","object":"item","currency":"eur","quantity":3}]}"#,
    )
    .unwrap();
    assert_eq!(page.next_cursor(), Some("li_2"));
    assert_eq!(page.data[1].currency, Currency::new("eur"));
}

#[test]
fn payment_link_application_may_be_expanded() {
    let link: PaymentLink = serde_json::from_str(
        r#"{"id":"plink_1","object":"payment_link","active":true,
            "after_completion":{"type":"redirect","redirect":{"url":"https://example.com/thanks"}},
            "application":{"id":"ca_1","object":"application","name":"Shop"},
            "on_behalf_of":"acct_1",
            "restrictions":{"completed_sessions":{"count":3,"limit":10}},
            "shipping_options":[],
            "url":"https://buy.stripe.com/test_1"}"#,
    )
    .unwrap();
    let after = link.after_completion.unwrap();
    assert_eq!(after.type_, Some(AfterCompletionType::Redirect));
    assert_eq!(after.redirect.unwrap().url, "https://example.com/thanks");

    let application = link.application.unwrap().into_resolved();
    assert_eq!(application.name.as_deref(), Some("Shop"));
    assert_eq!(link.on_behalf_of.unwrap().id(), "acct_1");
    assert_eq!(link.restrictions.unwrap().completed_sessions.unwrap().limit, 10);
}

#[test]
fn quote_decodes_computed_totals_and_revision_source() {
    let quote: Quote = serde_json::from_str(
        r#"{"id":"qt_2","object":"quote","amount_subtotal":5000,"amount_total":5000,
            "collection_method":"charge_automatically",
            "computed":{"recurring":{"amount_subtotal":2000,"amount_total":2000,"interval":"month","interval_count":1},
                        "upfront":{"amount_subtotal":5000,"amount_total":5000}},
            "created":1700000000,"currency":"usd","customer":"cus_1",
            "discounts":["di_1"],"expires_at":1702592000,
            "from_quote":{"is_revision":true,"quote":"qt_1"},
            "status":"open",
            "status_transitions":{"accepted_at":null,"canceled_at":null,"finalized_at":1700000100},
            "test_clock":null}"#,
    )
    .unwrap();
    assert_eq!(quote.status, Some(QuoteStatus::Open));
    let computed = quote.computed.unwrap();
    assert_eq!(computed.recurring.unwrap().amount_total, 2000);
    assert_eq!(computed.upfront.unwrap().amount_total, 5000);

    let from = quote.from_quote.unwrap();
    assert!(from.is_revision);
    assert_eq!(from.quote.unwrap().id(), "qt_1");
    assert_eq!(quote.discounts.unwrap()[0].id(), "di_1");
    assert_eq!(quote.status_transitions.unwrap().finalized_at, Some(1_700_000_100));
}

#[test]
fn quote_endpoints_use_their_action_paths() {
    assert_eq!(Quote::accept("qt_1").path, "/v1/quotes/qt_1/accept");
    assert_eq!(Quote::cancel("qt_1").method, Method::Post);
    assert_eq!(Quote::retrieve("qt_1").method, Method::Get);
}

#[test]
fn portal_configuration_features_decode() {
    let configuration: Configuration = serde_json::from_str(
        r#"{"id":"bpc_1","object":"billing_portal.configuration","active":true,
            "application":null,
            "business_profile":{"headline":"Acme","privacy_policy_url":null,"terms_of_service_url":null},
            "features":{
              "customer_update":{"allowed_updates":["email","tax_id"],"enabled":true},
              "invoice_history":{"enabled":true},
              "payment_method_update":{"enabled":false},
              "subscription_cancel":{"cancellation_reason":{"enabled":true,"options":["too_expensive"]},
                                     "enabled":true,"mode":"at_period_end","proration_behavior":"none"},
              "subscription_update":{"default_allowed_updates":[],"enabled":false,"products":null,
                                     "proration_behavior":"none"}},
            "is_default":true,"livemode":false,
            "login_page":{"enabled":false,"url":null},
            "metadata":{}}"#,
    )
    .unwrap();
    assert_eq!(Configuration::OBJECT, configuration.object);
    let features = configuration.features.unwrap();
    assert_eq!(
        features.customer_update.unwrap().allowed_updates,
        vec![CustomerUpdateAllowed::Email, CustomerUpdateAllowed::TaxId]
    );
    assert_eq!(
        features.subscription_cancel.unwrap().mode,
        Some(CancelMode::AtPeriodEnd)
    );
    assert!(configuration.application.is_none());
}

#[test]
fn portal_session_flow_and_expanded_configuration() {
    let session: Session = serde_json::from_str(
        r#"{"id":"bps_1","object":"billing_portal.session",
            "configuration":{"id":"bpc_1","object":"billing_portal.configuration","active":true},
            "created":1700000000,"customer":"cus_1",
            "flow":{"after_completion":{"hosted_confirmation":null,"redirect":null,"type":"portal_homepage"},
                    "subscription_cancel":null,"subscription_update":{"subscription":"sub_1"},
                    "subscription_update_confirm":null,"type":"subscription_update"},
            "livemode":false,"locale":null,"on_behalf_of":null,
            "return_url":"https://example.com/account",
            "url":"https://billing.stripe.com/p/session/test_1"}"#,
    )
    .unwrap();
    let configuration = session.configuration.unwrap();
    assert!(configuration.is_object());
    assert!(configuration.into_resolved().active);
    let flow = session.flow.unwrap();
    assert_eq!(flow.type_, FlowType::SubscriptionUpdate);
    assert_eq!(flow.subscription_update.unwrap().subscription, "sub_1");
}

#[test]
fn price_tiers_keep_the_unbounded_final_tier() {
    let price: Price = serde_json::from_str(
        r#"{"id":"price_t","object":"price","billing_scheme":"tiered","currency":"usd",
            "recurring":{"interval":"month","interval_count":1,"usage_type":"licensed"},
            "tiers":[{"flat_amount":null,"unit_amount":1000,"unit_amount_decimal":"1000","up_to":5},
                     {"flat_amount":null,"unit_amount":null,"unit_amount_decimal":"750.5","up_to":null}],
            "tiers_mode":"graduated","type":"recurring","unit_amount":null}"#,
    )
    .unwrap();
    assert!(price.is_recurring());
    let tiers = price.tiers.unwrap();
    assert_eq!(tiers[0].up_to, Some(5));
    assert_eq!(tiers[1].up_to, None);
    assert_eq!(tiers[1].unit_amount_decimal, Some(750.5));
}
