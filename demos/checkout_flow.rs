//! Walks through a checkout: build the create request, show what would be
//! sent, then decode a sample response the way a caller would after sending.

use log::{error, info};
use stripe_resources::logger::setup_logger;
use stripe_resources::stripe::checkout_session::{CheckoutLineItem, CreateCheckoutSession, Mode};
use stripe_resources::stripe::CheckoutSession;
use stripe_resources::{Result, StripeClient};

const SAMPLE_RESPONSE: &str = r#"{
  "id": "cs_test_demo",
  "object": "checkout.session",
  "amount_total": 2000,
  "currency": "usd",
  "customer": "cus_demo",
  "mode": "payment",
  "payment_status": "unpaid",
  "status": "open",
  "url": "https://checkout.stripe.com/c/pay/cs_test_demo"
}"#;

fn run() -> Result<()> {
    let client = StripeClient::from_env()?;

    let mut params = CreateCheckoutSession::new(Mode::Payment);
    params.success_url = Some("https://example.com/success".to_owned());
    params.cancel_url = Some("https://example.com/cancel".to_owned());
    params
        .add_line_item(CheckoutLineItem::price("price_demo", 2))
        .add_metadata("order_id", "1001");

    let request = CheckoutSession::create(&params)?.expand("customer");
    let prepared = client.prepare(&request)?;
    info!("{} {}", prepared.method, prepared.url);
    for (name, value) in &prepared.headers {
        info!("  {}: {}", name, value);
    }
    if let Some(body) = &prepared.body {
        info!("  body: {}", body);
    }

    let session: CheckoutSession = client.decode_response(200, SAMPLE_RESPONSE)?;
    info!(
        "session {} for {} is {}; paid: {}",
        session.id,
        session.customer.as_ref().map(|c| c.id()).unwrap_or("guest"),
        session.status.as_ref().map(|s| s.as_str()).unwrap_or("unknown"),
        session.is_paid()
    );
    Ok(())
}

fn main() {
    setup_logger();
    if let Err(e) = run() {
        error!("{}", e);
        std::process::exit(1);
    }
}
