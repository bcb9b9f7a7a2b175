//! Order processor capability.

use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;

use climastore_cart::Cart;

use crate::shipping::ShippingDetails;

/// What the processor hands back for an accepted order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OrderConfirmation {
    pub order_number: u64,
}

/// Failure reported by an order processor.
///
/// Checkout propagates these unchanged; retries and timeouts are the
/// processor's business.
#[derive(Debug, Error)]
pub enum OrderProcessingError {
    /// The processor looked at the order and refused it.
    #[error("order rejected by processor: {0}")]
    Rejected(String),

    /// The processor could not be reached or failed internally.
    #[error("order processor unavailable")]
    Unavailable(#[source] anyhow::Error),
}

impl OrderProcessingError {
    pub fn rejected(msg: impl Into<String>) -> Self {
        Self::Rejected(msg.into())
    }

    pub fn unavailable(err: impl Into<anyhow::Error>) -> Self {
        Self::Unavailable(err.into())
    }
}

/// Fulfills validated orders.
///
/// Called at most once per checkout attempt. The call is synchronous.
pub trait OrderProcessor: Send + Sync {
    fn process_order(
        &self,
        cart: &Cart,
        shipping: &ShippingDetails,
    ) -> Result<OrderConfirmation, OrderProcessingError>;
}

impl<P> OrderProcessor for Arc<P>
where
    P: OrderProcessor + ?Sized,
{
    fn process_order(
        &self,
        cart: &Cart,
        shipping: &ShippingDetails,
    ) -> Result<OrderConfirmation, OrderProcessingError> {
        (**self).process_order(cart, shipping)
    }
}
