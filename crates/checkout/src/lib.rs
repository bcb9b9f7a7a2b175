//! Checkout workflow.
//!
//! Gates order submission on a non-empty cart and valid shipping details, then
//! hands the order to an [`OrderProcessor`]. Field-level shipping validation and
//! order fulfillment are capabilities supplied by the caller.

pub mod processor;
pub mod shipping;
pub mod workflow;

pub use processor::{OrderConfirmation, OrderProcessingError, OrderProcessor};
pub use shipping::{ShippingDetails, ShippingValidation, ShippingValidator, ShippingViolation};
pub use workflow::{checkout, CheckoutError, CheckoutOutcome, CheckoutRejection, CheckoutWorkflow};
