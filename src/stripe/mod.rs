//! Stripe resources: response models, request parameters and endpoints.

pub mod api_error;
pub mod application;
pub mod billing_portal;
pub mod checkout_session;
pub mod line_item;
pub mod payment_link;
pub mod price;
pub mod quote;

pub use api_error::{ApiError, ApiErrorResponse, ErrorType};
pub use application::Application;
pub use checkout_session::{CheckoutSession, CreateCheckoutSession, UpdateCheckoutSession};
pub use line_item::LineItem;
pub use payment_link::{CreatePaymentLink, PaymentLink, UpdatePaymentLink};
pub use price::{CreatePrice, Price, UpdatePrice};
pub use quote::{CreateQuote, Quote, UpdateQuote};
