//! Session glue between callers, the catalog, and the cart.
//!
//! Every mutation follows the same cycle:
//!
//! ```text
//! load cart for session (or a fresh one on first access)
//!   -> apply operation
//!   -> save with ExpectedVersion::Exact(loaded version)   (skipped if nothing changed)
//! ```
//!
//! A concurrent write for the same session surfaces as `DomainError::Conflict`.

use climastore_cart::Cart;
use climastore_catalog::ProductLookup;
use climastore_checkout::{
    CheckoutOutcome, CheckoutWorkflow, OrderProcessingError, OrderProcessor, ShippingDetails,
    ShippingValidator,
};
use climastore_core::{AggregateRoot, DomainResult, ExpectedVersion, ProductId, SessionId};

use crate::session::SessionStore;

/// Result of an add/remove request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartChange {
    /// The operation ran; this is the session's cart afterwards.
    Applied(Cart),
    /// The product id does not resolve in the catalog; nothing changed.
    UnknownProduct,
}

/// Storefront operations scoped to a session.
#[derive(Debug)]
pub struct Storefront<C, S> {
    catalog: C,
    sessions: S,
}

impl<C, S> Storefront<C, S>
where
    C: ProductLookup,
    S: SessionStore,
{
    pub fn new(catalog: C, sessions: S) -> Self {
        Self { catalog, sessions }
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn sessions(&self) -> &S {
        &self.sessions
    }

    /// The session's cart, or a fresh empty one on first access.
    ///
    /// A fresh cart is not stored until something changes it.
    pub fn cart(&self, session: SessionId) -> Cart {
        self.sessions.load(session).unwrap_or_default()
    }

    /// Add `quantity` units of the catalog product `product_id`.
    pub fn add_to_cart(
        &self,
        session: SessionId,
        product_id: ProductId,
        quantity: u32,
    ) -> DomainResult<CartChange> {
        let Some(product) = self.catalog.find_product_by_id(product_id) else {
            tracing::debug!(%session, %product_id, "add to cart ignored: unknown product");
            return Ok(CartChange::UnknownProduct);
        };

        let cart = self.update(session, |cart| cart.add_item(&product, quantity))?;
        Ok(CartChange::Applied(cart))
    }

    /// Remove the line for `product_id`.
    pub fn remove_from_cart(
        &self,
        session: SessionId,
        product_id: ProductId,
    ) -> DomainResult<CartChange> {
        let Some(product) = self.catalog.find_product_by_id(product_id) else {
            tracing::debug!(%session, %product_id, "remove from cart ignored: unknown product");
            return Ok(CartChange::UnknownProduct);
        };

        let cart = self.update(session, |cart| {
            cart.remove_line(&product);
            Ok(())
        })?;
        Ok(CartChange::Applied(cart))
    }

    pub fn clear_cart(&self, session: SessionId) -> DomainResult<Cart> {
        self.update(session, |cart| {
            cart.clear();
            Ok(())
        })
    }

    /// Check out the session's cart, emptying it once the order is submitted.
    ///
    /// If the cart changed concurrently while the order was being processed,
    /// the cart is left as is (and a warning logged); the outcome is still
    /// `Submitted`.
    pub fn checkout<P, V>(
        &self,
        session: SessionId,
        workflow: &CheckoutWorkflow<P, V>,
        shipping: &ShippingDetails,
    ) -> Result<CheckoutOutcome, OrderProcessingError>
    where
        P: OrderProcessor,
        V: ShippingValidator,
    {
        let mut cart = self.cart(session);
        let loaded = cart.version();

        let outcome = workflow.submit(&cart, shipping)?;

        if outcome.is_submitted() {
            cart.clear();
            if let Err(e) = self
                .sessions
                .save(session, cart, ExpectedVersion::Exact(loaded))
            {
                tracing::warn!(%session, error = %e, "order submitted but cart could not be cleared");
            }
        }

        Ok(outcome)
    }

    fn update<F>(&self, session: SessionId, op: F) -> DomainResult<Cart>
    where
        F: FnOnce(&mut Cart) -> DomainResult<()>,
    {
        let mut cart = self.cart(session);
        let loaded = cart.version();

        op(&mut cart)?;

        if cart.version() != loaded {
            self.sessions
                .save(session, cart.clone(), ExpectedVersion::Exact(loaded))
                .inspect_err(|e| tracing::warn!(%session, error = %e, "cart update rejected"))?;
        }
        Ok(cart)
    }
}
