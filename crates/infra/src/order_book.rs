//! Order processor that keeps submitted orders in memory.

use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::Serialize;

use climastore_cart::Cart;
use climastore_checkout::{OrderConfirmation, OrderProcessingError, OrderProcessor, ShippingDetails};
use climastore_core::{Money, ProductId};

/// Snapshot of one cart line at submission time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderedLine {
    pub product_id: ProductId,
    pub name: String,
    pub unit_price: Money,
    pub quantity: u32,
}

/// An order as the order book received it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmittedOrder {
    pub order_number: u64,
    pub lines: Vec<OrderedLine>,
    pub total: Money,
    pub shipping: ShippingDetails,
    pub submitted_at: DateTime<Utc>,
}

#[derive(Debug, Default)]
struct OrderBookState {
    orders: Vec<SubmittedOrder>,
    failure: Option<String>,
}

/// In-memory [`OrderProcessor`]: numbers orders from 1, records a snapshot of
/// each and logs it.
#[derive(Debug, Default)]
pub struct InMemoryOrderBook {
    state: Mutex<OrderBookState>,
}

impl InMemoryOrderBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject every following order with `reason` (until [`Self::accept_orders`]).
    pub fn fail_with(&self, reason: impl Into<String>) {
        if let Ok(mut state) = self.state.lock() {
            state.failure = Some(reason.into());
        }
    }

    pub fn accept_orders(&self) {
        if let Ok(mut state) = self.state.lock() {
            state.failure = None;
        }
    }

    pub fn orders(&self) -> Vec<SubmittedOrder> {
        self.state
            .lock()
            .map(|s| s.orders.clone())
            .unwrap_or_default()
    }
}

impl OrderProcessor for InMemoryOrderBook {
    fn process_order(
        &self,
        cart: &Cart,
        shipping: &ShippingDetails,
    ) -> Result<OrderConfirmation, OrderProcessingError> {
        let mut state = self
            .state
            .lock()
            .map_err(|_| OrderProcessingError::unavailable(anyhow::anyhow!("order book lock poisoned")))?;

        if let Some(reason) = &state.failure {
            return Err(OrderProcessingError::rejected(reason.clone()));
        }

        let order_number = state.orders.len() as u64 + 1;
        let lines: Vec<OrderedLine> = cart
            .lines()
            .iter()
            .map(|l| OrderedLine {
                product_id: l.product().id_typed(),
                name: l.product().name().to_string(),
                unit_price: l.product().price(),
                quantity: l.quantity(),
            })
            .collect();
        let total = cart
            .calculate_total_value()
            .map_err(|e| OrderProcessingError::rejected(e.to_string()))?;

        tracing::info!(
            order_number,
            lines = lines.len(),
            total = %total,
            ship_to = %shipping.name,
            country = %shipping.country,
            gift_wrap = shipping.gift_wrap,
            "new order received"
        );

        state.orders.push(SubmittedOrder {
            order_number,
            lines,
            total,
            shipping: shipping.clone(),
            submitted_at: Utc::now(),
        });

        Ok(OrderConfirmation { order_number })
    }
}
