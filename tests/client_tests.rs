use pretty_assertions::assert_eq;
use stripe_resources::client::{DEFAULT_API_VERSION, USER_AGENT};
use stripe_resources::stripe::api_error::ErrorType;
use stripe_resources::stripe::checkout_session::{
    CheckoutLineItem, CheckoutSession, CreateCheckoutSession, ListCheckoutSessions, Mode,
};
use stripe_resources::stripe::line_item::ListLineItems;
use stripe_resources::stripe::Quote;
use stripe_resources::types::ListParams;
use stripe_resources::{Error, Method, StripeClient};

#[test]
fn get_requests_carry_params_in_the_query() {
    let client = StripeClient::new();
    let request = CheckoutSession::list(&ListCheckoutSessions {
        list: ListParams {
            limit: Some(3),
            ..Default::default()
        },
        customer: Some("cus_1".to_owned()),
        ..Default::default()
    })
    .unwrap();
    let prepared = client.prepare(&request).unwrap();

    assert_eq!(prepared.method, Method::Get);
    assert_eq!(
        prepared.url.as_str(),
        "https://api.stripe.com/v1/checkout/sessions?customer=cus_1&limit=3"
    );
    assert_eq!(prepared.body, None);
    assert_eq!(prepared.header("stripe-version"), Some(DEFAULT_API_VERSION));
    assert_eq!(prepared.header("User-Agent"), Some(USER_AGENT));
    assert_eq!(prepared.header("Content-Type"), None);
}

#[test]
fn post_requests_carry_params_in_the_body() {
    let mut params = CreateCheckoutSession::new(Mode::Subscription);
    params.add_line_item(CheckoutLineItem::price("price_1", 1));
    let request = CheckoutSession::create(&params).unwrap().expand("line_items");
    let prepared = StripeClient::new()
        .with_stripe_account("acct_1")
        .prepare(&request)
        .unwrap();

    assert_eq!(prepared.url.as_str(), "https://api.stripe.com/v1/checkout/sessions");
    assert_eq!(
        prepared.body.as_deref(),
        Some("line_items[0][price]=price_1&line_items[0][quantity]=1&mode=subscription&expand[0]=line_items")
    );
    assert_eq!(
        prepared.header("Content-Type"),
        Some("application/x-www-form-urlencoded")
    );
    assert_eq!(prepared.header("Stripe-Account"), Some("acct_1"));
}

#[test]
fn base_urls_keep_their_path_prefix() {
    let client = StripeClient::new()
        .with_api_base("http://localhost:12111/stripe/")
        .unwrap()
        .with_api_version("2023-10-16");
    let request = Quote::list_line_items("qt_1", &ListLineItems::default()).unwrap();
    let prepared = client.prepare(&request).unwrap();
    assert_eq!(
        prepared.url.as_str(),
        "http://localhost:12111/stripe/v1/quotes/qt_1/line_items"
    );
    assert_eq!(prepared.header("Stripe-Version"), Some("2023-10-16"));

    assert!(StripeClient::new().with_api_base("mailto:ops@example.com").is_err());
}

#[test]
fn quote_pdf_goes_to_the_files_host() {
    let prepared = StripeClient::new().prepare(&Quote::pdf("qt_1")).unwrap();
    assert_eq!(prepared.url.as_str(), "https://files.stripe.com/v1/quotes/qt_1/pdf");
}

#[test]
fn error_statuses_decode_the_error_envelope() {
    let client = StripeClient::new();
    let body = r#"{"error":{"type":"invalid_request_error","code":"resource_missing",
        "message":"No such checkout.session: 'cs_x'","param":"id"}}"#;
    match client.decode_response::<CheckoutSession>(404, body) {
        Err(Error::Api { status, error }) => {
            assert_eq!(status, 404);
            assert_eq!(error.type_, Some(ErrorType::InvalidRequest));
            assert_eq!(error.code.as_deref(), Some("resource_missing"));
            assert_eq!(error.param.as_deref(), Some("id"));
        }
        other => panic!("expected an API error, got {:?}", other),
    }

    match client.decode_response::<CheckoutSession>(502, "Bad Gateway") {
        Err(Error::Api { error, .. }) => assert_eq!(error.message.as_deref(), Some("Bad Gateway")),
        other => panic!("expected an API error, got {:?}", other),
    }
}

#[test]
fn success_statuses_decode_the_model() {
    let session: CheckoutSession = StripeClient::new()
        .decode_response(200, r#"{"id":"cs_1","object":"checkout.session","customer":"cus_1"}"#)
        .unwrap();
    assert_eq!(session.id, "cs_1");
    assert!(matches!(
        StripeClient::new().decode_response::<CheckoutSession>(200, "not json"),
        Err(Error::Json(_))
    ));
}

#[test]
fn environment_overrides_defaults() {
    std::env::set_var("STRIPE_API_BASE", "http://127.0.0.1:12111");
    std::env::set_var("STRIPE_ACCOUNT", "acct_env");
    let client = StripeClient::from_env().unwrap();
    std::env::remove_var("STRIPE_API_BASE");
    std::env::remove_var("STRIPE_ACCOUNT");

    assert_eq!(client.api_base.as_str(), "http://127.0.0.1:12111/");
    assert_eq!(client.stripe_account.as_deref(), Some("acct_env"));
}

#[test]
fn json_bodies_without_an_envelope_are_kept_verbatim() {
    let client = StripeClient::new();
    for (status, body) in [
        (503, r#"{"message":"upstream connect error","code":503}"#),
        (500, "{}"),
    ] {
        match client.decode_response::<CheckoutSession>(status, body) {
            Err(Error::Api { status: got, error }) => {
                assert_eq!(got, status);
                assert_eq!(error.message.as_deref(), Some(body));
                assert_eq!(error.to_string(), format!("error: {}", body));
            }
            other => panic!("expected an API error, got {:?}", other),
        }
    }
}
