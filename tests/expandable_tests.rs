use pretty_assertions::assert_eq;
use proptest::prelude::*;
use stripe_resources::stripe::{Application, Price};
use stripe_resources::types::related::Customer;
use stripe_resources::{Expandable, Object};

proptest! {
    #[test]
    fn bare_id_resolves_to_a_stub(id in "[a-z]{2,6}_[A-Za-z0-9]{1,24}") {
        let json = serde_json::to_string(&id).unwrap();
        let decoded: Expandable<Customer> = serde_json::from_str(&json).unwrap();
        prop_assert!(!decoded.is_object());
        prop_assert_eq!(decoded.id(), id.as_str());
        prop_assert_eq!(decoded.into_resolved(), Customer::from_id(id.clone()));
    }

    #[test]
    fn expanded_object_keeps_its_own_id(
        id in "cus_[A-Za-z0-9]{1,24}",
        name in proptest::option::of("[A-Za-z ]{0,20}"),
    ) {
        let json = serde_json::json!({
            "id": id,
            "object": "customer",
            "name": name,
            "livemode": false,
        });
        let decoded: Expandable<Customer> = serde_json::from_value(json).unwrap();
        prop_assert!(decoded.is_object());
        prop_assert_eq!(decoded.id(), id.as_str());
        let customer = decoded.into_resolved();
        prop_assert_eq!(customer.name, name);
    }
}

#[test]
fn numbers_and_arrays_are_rejected() {
    for body in ["42", "[\"price_1\"]", "true"] {
        let decoded = serde_json::from_str::<Expandable<Price>>(body);
        assert!(decoded.is_err(), "{} should not decode", body);
    }
}

#[test]
fn missing_and_null_references_are_none() {
    #[derive(serde::Deserialize)]
    struct Holder {
        #[serde(default)]
        application: Option<Expandable<Application>>,
    }
    let missing: Holder = serde_json::from_str("{}").unwrap();
    let null: Holder = serde_json::from_str(r#"{"application":null}"#).unwrap();
    assert!(missing.application.is_none());
    assert!(null.application.is_none());
}

#[test]
fn top_level_resource_accepts_an_id() {
    let stub = Price::from_json(r#""price_1""#).unwrap();
    assert_eq!(stub, Price::from_id("price_1".to_owned()));

    let full = Price::from_json(r#"{"id":"price_2","object":"price","currency":"usd","unit_amount":500}"#)
        .unwrap();
    assert_eq!(full.id, "price_2");
    assert_eq!(full.unit_amount, Some(500));
}

#[test]
fn references_encode_in_the_shape_they_arrived() {
    let id: Expandable<Customer> = "cus_1".into();
    assert_eq!(serde_json::to_value(&id).unwrap(), serde_json::json!("cus_1"));

    let object: Expandable<Customer> = Customer::from_id("cus_2".to_owned()).into();
    assert_eq!(object.id(), "cus_2");
    assert_eq!(serde_json::to_value(&object).unwrap()["id"], serde_json::json!("cus_2"));
}
