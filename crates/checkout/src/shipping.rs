//! Shipping details and the validation capability.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use climastore_core::ValueObject;

/// Where to ship an order.
///
/// Passed through to the order processor untouched; the checkout workflow
/// never looks inside.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingDetails {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub line1: String,
    #[serde(default)]
    pub line2: Option<String>,
    #[serde(default)]
    pub line3: Option<String>,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub zip: Option<String>,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub gift_wrap: bool,
}

impl ValueObject for ShippingDetails {}

/// A single field-level problem with shipping details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShippingViolation {
    pub field: String,
    pub message: String,
}

impl ShippingViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Result of validating shipping details. Valid iff there are no violations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShippingValidation {
    violations: Vec<ShippingViolation>,
}

impl ShippingValidation {
    pub fn valid() -> Self {
        Self::default()
    }

    pub fn with_violations(violations: Vec<ShippingViolation>) -> Self {
        Self { violations }
    }

    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[ShippingViolation] {
        &self.violations
    }

    pub fn into_violations(self) -> Vec<ShippingViolation> {
        self.violations
    }
}

/// Validates shipping details before checkout.
pub trait ShippingValidator: Send + Sync {
    fn validate(&self, details: &ShippingDetails) -> ShippingValidation;
}

impl<V> ShippingValidator for Arc<V>
where
    V: ShippingValidator + ?Sized,
{
    fn validate(&self, details: &ShippingDetails) -> ShippingValidation {
        (**self).validate(details)
    }
}
