//! Checkout gating and submission.
//!
//! Each attempt goes `Pending -> Rejected(EmptyCart) | Rejected(InvalidShipping) | Submitted`.
//! The empty-cart gate is evaluated first: an empty cart is reported as
//! `EmptyCart` even when the shipping details are invalid too.

use thiserror::Error;

use climastore_cart::Cart;

use crate::processor::{OrderConfirmation, OrderProcessingError, OrderProcessor};
use crate::shipping::{ShippingDetails, ShippingValidator, ShippingViolation};

/// Why a checkout attempt was turned away before reaching the processor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutRejection {
    #[error("Sorry, your cart is empty!")]
    EmptyCart,

    #[error("shipping details are invalid")]
    InvalidShipping(Vec<ShippingViolation>),
}

/// Outcome of a checkout attempt that did not fail in the processor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutOutcome {
    Submitted(OrderConfirmation),
    Rejected(CheckoutRejection),
}

impl CheckoutOutcome {
    pub fn is_submitted(&self) -> bool {
        matches!(self, CheckoutOutcome::Submitted(_))
    }

    pub fn into_result(self) -> Result<OrderConfirmation, CheckoutError> {
        match self {
            CheckoutOutcome::Submitted(confirmation) => Ok(confirmation),
            CheckoutOutcome::Rejected(rejection) => Err(rejection.into()),
        }
    }
}

/// Rejection or processor failure, for callers that want a single error type.
#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error(transparent)]
    Rejected(#[from] CheckoutRejection),

    #[error(transparent)]
    Processing(#[from] OrderProcessingError),
}

/// Run the checkout gates with an externally-computed shipping validity flag.
///
/// The processor is invoked exactly once when the cart is non-empty and
/// `shipping_valid` is true, and never otherwise. Processor errors are
/// returned as-is.
pub fn checkout<P>(
    processor: &P,
    cart: &Cart,
    shipping: &ShippingDetails,
    shipping_valid: bool,
) -> Result<CheckoutOutcome, OrderProcessingError>
where
    P: OrderProcessor + ?Sized,
{
    run(processor, cart, shipping, shipping_valid, Vec::new())
}

fn run<P>(
    processor: &P,
    cart: &Cart,
    shipping: &ShippingDetails,
    shipping_valid: bool,
    violations: Vec<ShippingViolation>,
) -> Result<CheckoutOutcome, OrderProcessingError>
where
    P: OrderProcessor + ?Sized,
{
    if cart.is_empty() {
        tracing::warn!(cart_id = %cart.id_typed(), "checkout rejected: cart is empty");
        return Ok(CheckoutOutcome::Rejected(CheckoutRejection::EmptyCart));
    }

    if !shipping_valid {
        tracing::warn!(
            cart_id = %cart.id_typed(),
            violations = violations.len(),
            "checkout rejected: invalid shipping details"
        );
        return Ok(CheckoutOutcome::Rejected(CheckoutRejection::InvalidShipping(
            violations,
        )));
    }

    let confirmation = processor.process_order(cart, shipping)?;
    tracing::info!(
        cart_id = %cart.id_typed(),
        order_number = confirmation.order_number,
        items = cart.item_count(),
        "order submitted"
    );
    Ok(CheckoutOutcome::Submitted(confirmation))
}

/// Checkout with its collaborators injected up front.
#[derive(Debug, Clone)]
pub struct CheckoutWorkflow<P, V> {
    processor: P,
    validator: V,
}

impl<P, V> CheckoutWorkflow<P, V>
where
    P: OrderProcessor,
    V: ShippingValidator,
{
    pub fn new(processor: P, validator: V) -> Self {
        Self {
            processor,
            validator,
        }
    }

    pub fn processor(&self) -> &P {
        &self.processor
    }

    pub fn validator(&self) -> &V {
        &self.validator
    }

    /// Validate `shipping` with the injected validator, then run the gates.
    ///
    /// An `InvalidShipping` rejection carries the validator's violations.
    pub fn submit(
        &self,
        cart: &Cart,
        shipping: &ShippingDetails,
    ) -> Result<CheckoutOutcome, OrderProcessingError> {
        let validation = self.validator.validate(shipping);
        let valid = validation.is_valid();
        run(&self.processor, cart, shipping, valid, validation.into_violations())
    }
}
