//! Stripe edge functions and the client-side Stripe service.

mod authenticated;
mod client;
mod cors;
mod edge_function;
mod webhook;

pub use client::{StripeIndex, StripeService, StripeTypes};
pub use cors::CorsHeaders;
pub use edge_function::{EdgeFunction, EdgeFunctionFile};
pub use webhook::{HANDLED_EVENTS, WebhookEvent, handled_event_types};
