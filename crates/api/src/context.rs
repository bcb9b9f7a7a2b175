use climastore_core::SessionId;

/// Session context for a request.
///
/// Inserted by the session middleware for every request; handlers use it to
/// find the caller's cart.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SessionContext {
    session_id: SessionId,
}

impl SessionContext {
    pub fn new(session_id: SessionId) -> Self {
        Self { session_id }
    }

    pub fn session_id(&self) -> SessionId {
        self.session_id
    }
}
