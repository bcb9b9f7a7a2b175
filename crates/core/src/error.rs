//! Domain error model shared by the catalog, the cart and session storage.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Deterministic storefront failure.
///
/// Checkout gating and order-processor failures have their own types in the
/// checkout crate; this enum covers what the catalog, the cart and the
/// session store can reject.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Bad input, e.g. a blank product name or a zero quantity.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The cart would break one of its own rules, e.g. a line quantity or
    /// the cart total no longer fits.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    /// A product or session id did not parse, or a product id was zero.
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// Lookup miss. Cart operations treat unknown products as no-ops instead.
    #[error("not found")]
    NotFound,

    /// The session's cart was written by someone else since it was loaded.
    #[error("conflict: {0}")]
    Conflict(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_the_detail() {
        assert_eq!(
            DomainError::validation("quantity must be positive").to_string(),
            "validation failed: quantity must be positive"
        );
        assert_eq!(
            DomainError::invariant("cart total overflow").to_string(),
            "invariant violated: cart total overflow"
        );
        assert_eq!(DomainError::not_found().to_string(), "not found");
    }

    #[test]
    fn helpers_pick_the_matching_variant() {
        assert!(matches!(DomainError::invalid_id("x"), DomainError::InvalidId(_)));
        assert!(matches!(DomainError::conflict("stale"), DomainError::Conflict(_)));
    }
}
