use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use climastore_cart::Cart;
use climastore_core::{AggregateRoot, DomainError, DomainResult, ExpectedVersion, SessionId};

/// Session-keyed cart storage.
///
/// Writes carry the version the caller loaded; a session with no stored cart
/// counts as version 0. Stale writes fail with [`DomainError::Conflict`], which
/// serializes concurrent requests against the same session.
pub trait SessionStore: Send + Sync {
    fn load(&self, session: SessionId) -> Option<Cart>;
    fn save(&self, session: SessionId, cart: Cart, expected: ExpectedVersion) -> DomainResult<()>;
    /// Forget the session's cart entirely.
    fn remove(&self, session: SessionId);
}

impl<S> SessionStore for Arc<S>
where
    S: SessionStore + ?Sized,
{
    fn load(&self, session: SessionId) -> Option<Cart> {
        (**self).load(session)
    }

    fn save(&self, session: SessionId, cart: Cart, expected: ExpectedVersion) -> DomainResult<()> {
        (**self).save(session, cart, expected)
    }

    fn remove(&self, session: SessionId) {
        (**self).remove(session)
    }
}

/// In-memory session store for tests/dev.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    carts: RwLock<HashMap<SessionId, Cart>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session_count(&self) -> usize {
        self.carts.read().map(|m| m.len()).unwrap_or(0)
    }
}

impl SessionStore for InMemorySessionStore {
    fn load(&self, session: SessionId) -> Option<Cart> {
        let map = self.carts.read().ok()?;
        map.get(&session).cloned()
    }

    fn save(&self, session: SessionId, cart: Cart, expected: ExpectedVersion) -> DomainResult<()> {
        let mut map = self
            .carts
            .write()
            .map_err(|_| DomainError::invariant("session store lock poisoned"))?;

        let current = map.get(&session).map(|c| c.version()).unwrap_or(0);
        expected.check(current)?;

        map.insert(session, cart);
        Ok(())
    }

    fn remove(&self, session: SessionId) {
        if let Ok(mut map) = self.carts.write() {
            map.remove(&session);
        }
    }
}
