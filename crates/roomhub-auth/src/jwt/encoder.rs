//! JWT token creation.

use chrono::{Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};

use roomhub_core::config::AuthConfig;
use roomhub_core::error::AppError;
use roomhub_core::types::UserId;

use super::claims::Claims;

/// Upper bound on the configured access TTL (one year).
const MAX_TTL_MINUTES: i64 = 60 * 24 * 365;

/// Signs access tokens with the configured HMAC secret.
#[derive(Clone)]
pub struct JwtEncoder {
    encoding_key: EncodingKey,
    access_ttl: Duration,
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
    pub fn new(config: &AuthConfig) -> Self {
        let minutes = i64::try_from(config.jwt_access_ttl_minutes)
            .unwrap_or(MAX_TTL_MINUTES)
            .min(MAX_TTL_MINUTES);
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            access_ttl: Duration::minutes(minutes),
        }
    }

    /// Issues an access token for a user.
    pub fn issue(&self, user_id: UserId) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id,
            iat: now.timestamp(),
            exp: (now + self.access_ttl).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to sign token: {e}")))
    }
}
