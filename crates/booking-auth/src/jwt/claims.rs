//! JWT claims structure carried by access tokens.

use serde::{Deserialize, Serialize};

use booking_core::error::AppError;
use booking_core::types::UserId;

/// Claims payload embedded in every access token.
///
/// `sub` carries the user id in decimal, as JWT subjects are strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user ID.
    pub sub: String,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

impl Claims {
    /// Builds claims for `user_id` valid between `iat` and `exp`.
    pub fn new(user_id: UserId, iat: i64, exp: i64) -> Self {
        Self {
            sub: user_id.to_string(),
            iat,
            exp,
        }
    }

    /// Returns the user ID from the subject claim.
    pub fn user_id(&self) -> Result<UserId, AppError> {
        self.sub
            .parse()
            .map_err(|_| AppError::unauthorized("Token subject is not a user id"))
    }
}
