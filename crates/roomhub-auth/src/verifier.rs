//! Bearer token verification backed by server-side sessions.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use roomhub_core::error::AppError;
use roomhub_core::result::AppResult;
use roomhub_core::types::UserId;
use roomhub_database::store::SessionLookup;

use crate::jwt::decoder::JwtDecoder;

/// Capability that yields a verified user identity for a bearer token.
#[async_trait]
pub trait IdentityVerifier: Send + Sync + std::fmt::Debug {
    /// Returns the user the token speaks for, or an `Unauthorized` error.
    async fn verify(&self, token: &str) -> AppResult<UserId>;
}

/// Verifies the JWT, then requires a live session issued for that exact token.
#[derive(Debug, Clone)]
pub struct SessionVerifier {
    decoder: Arc<JwtDecoder>,
    sessions: Arc<dyn SessionLookup>,
}

impl SessionVerifier {
    /// Creates a verifier over a decoder and a session source.
    pub fn new(decoder: Arc<JwtDecoder>, sessions: Arc<dyn SessionLookup>) -> Self {
        Self { decoder, sessions }
    }
}

#[async_trait]
impl IdentityVerifier for SessionVerifier {
    async fn verify(&self, token: &str) -> AppResult<UserId> {
        let claims = self.decoder.decode_access_token(token)?;

        let session = self
            .sessions
            .find_session_by_token(token)
            .await?
            .ok_or_else(|| AppError::unauthorized("No active session for token"))?;

        if session.user_id != claims.user_id() {
            debug!(
                session_user = %session.user_id,
                token_user = %claims.user_id(),
                "Session does not match token subject"
            );
            return Err(AppError::unauthorized("Session does not match token"));
        }

        Ok(claims.user_id())
    }
}
