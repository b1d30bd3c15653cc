//! Request context carrying the authenticated caller.

use booking_core::types::UserId;

/// Context for the current authenticated request.
///
/// Built by the HTTP layer from the verified bearer token and passed into
/// service methods so every operation knows *who* is acting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestContext {
    /// The authenticated user's ID.
    pub user_id: UserId,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(user_id: UserId) -> Self {
        Self { user_id }
    }
}
