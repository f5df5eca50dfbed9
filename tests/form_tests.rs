use pretty_assertions::assert_eq;
use stripe_resources::form;
use stripe_resources::stripe::checkout_session::{
    CheckoutLineItem, CreateCheckoutSession, LineItemPriceData, LineItemProductData,
    ListCheckoutSessions, Mode, Status,
};
use stripe_resources::stripe::payment_link::{PaymentMethodType, UpdatePaymentLink};
use stripe_resources::stripe::price::{Price, SearchPrices};
use stripe_resources::types::common::DiscountParams;
use stripe_resources::types::{CreatedFilter, Currency, ListParams, RangeQuery};

fn pairs(expected: &[(&str, &str)]) -> Vec<(String, String)> {
    expected
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

#[test]
fn checkout_session_create_nests_line_items_and_sorts_metadata() {
    let mut params = CreateCheckoutSession::new(Mode::Payment);
    params.success_url = Some("https://example.com/success".to_owned());
    params.discounts = Some(vec![DiscountParams::coupon("SPRING")]);
    params
        .add_line_item(CheckoutLineItem::price("price_1", 2))
        .add_line_item(CheckoutLineItem {
            price_data: Some(LineItemPriceData {
                currency: Currency::new("EUR"),
                product_data: Some(LineItemProductData {
                    name: "Tee".to_owned(),
                    ..Default::default()
                }),
                unit_amount: Some(1500),
                ..Default::default()
            }),
            quantity: Some(1),
            ..Default::default()
        });
    params.add_metadata("order", "42").add_metadata("cart", "7");

    assert_eq!(
        form::to_pairs(&params).unwrap(),
        pairs(&[
            ("discounts[0][coupon]", "SPRING"),
            ("line_items[0][price]", "price_1"),
            ("line_items[0][quantity]", "2"),
            ("line_items[1][price_data][currency]", "eur"),
            ("line_items[1][price_data][product_data][name]", "Tee"),
            ("line_items[1][price_data][unit_amount]", "1500"),
            ("line_items[1][quantity]", "1"),
            ("metadata[cart]", "7"),
            ("metadata[order]", "42"),
            ("mode", "payment"),
            ("success_url", "https://example.com/success"),
        ])
    );
}

#[test]
fn empty_values_clear_fields_on_update() {
    let params = UpdatePaymentLink {
        inactive_message: Some(String::new()),
        payment_method_types: Some(vec![]),
        ..Default::default()
    };
    assert_eq!(
        form::to_string(&params).unwrap(),
        "inactive_message=&payment_method_types="
    );

    let params = UpdatePaymentLink {
        payment_method_types: Some(vec![PaymentMethodType::Card, PaymentMethodType::Link]),
        ..Default::default()
    };
    assert_eq!(
        form::to_string(&params).unwrap(),
        "payment_method_types[0]=card&payment_method_types[1]=link"
    );
}

#[test]
fn list_params_flatten_alongside_filters() {
    let params = ListCheckoutSessions {
        list: ListParams {
            limit: Some(10),
            starting_after: Some("cs_1".to_owned()),
            ..Default::default()
        },
        created: Some(CreatedFilter::Range(RangeQuery {
            gte: Some(1_700_000_000),
            ..Default::default()
        })),
        status: Some(Status::Complete),
        ..Default::default()
    };
    assert_eq!(
        form::to_pairs(&params).unwrap(),
        pairs(&[
            ("created[gte]", "1700000000"),
            ("limit", "10"),
            ("starting_after", "cs_1"),
            ("status", "complete"),
        ])
    );

    let exact = ListCheckoutSessions {
        created: Some(1_700_000_000.into()),
        ..Default::default()
    };
    assert_eq!(form::to_string(&exact).unwrap(), "created=1700000000");
}

#[test]
fn search_query_is_escaped_in_the_request() {
    let mut params = SearchPrices::new("active:'true' AND currency:'usd'");
    params.search.limit = Some(5);
    let request = Price::search(&params).unwrap();
    assert_eq!(request.path, "/v1/prices/search");
    assert_eq!(
        request.encoded_params(),
        "limit=5&query=active%3A%27true%27+AND+currency%3A%27usd%27"
    );
}

#[test]
fn unknown_enum_values_pass_through() {
    let params = UpdatePaymentLink {
        payment_method_types: Some(vec![PaymentMethodType::from("brand_new_method")]),
        ..Default::default()
    };
    assert_eq!(
        form::to_string(&params).unwrap(),
        "payment_method_types[0]=brand_new_method"
    );
}
