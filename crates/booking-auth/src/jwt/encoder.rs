//! JWT token creation.

use chrono::{DateTime, TimeDelta, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};

use booking_core::config::AuthConfig;
use booking_core::error::AppError;
use booking_core::types::UserId;

use super::claims::Claims;

/// Creates signed access tokens.
#[derive(Clone)]
pub struct JwtEncoder {
    encoding_key: EncodingKey,
    access_ttl: TimeDelta,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder")
            .field("access_ttl", &self.access_ttl)
            .finish()
    }
}

impl JwtEncoder {
    /// Creates a new encoder from auth configuration.
    ///
    /// Fails with a configuration error when the access TTL does not fit
    /// in a `TimeDelta`.
    pub fn new(config: &AuthConfig) -> Result<Self, AppError> {
        let access_ttl = i64::try_from(config.jwt_access_ttl_minutes)
            .ok()
            .and_then(TimeDelta::try_minutes)
            .ok_or_else(|| {
                AppError::configuration(format!(
                    "jwt_access_ttl_minutes out of range: {}",
                    config.jwt_access_ttl_minutes
                ))
            })?;

        Ok(Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            access_ttl,
        })
    }

    /// Signs an access token for `user_id`, returning it with its expiry.
    pub fn generate_access_token(
        &self,
        user_id: UserId,
    ) -> Result<(String, DateTime<Utc>), AppError> {
        let now = Utc::now();
        let exp = now.checked_add_signed(self.access_ttl).ok_or_else(|| {
            AppError::configuration("Access token expiry is out of range")
        })?;

        let claims = Claims::new(user_id, now.timestamp(), exp.timestamp());

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode access token: {e}")))?;

        Ok((token, exp))
    }
}
