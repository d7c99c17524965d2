//! Shared application state passed to every handler via Axum's `State`.

use std::sync::Arc;

use roomhub_auth::{IdentityVerifier, JwtDecoder, SessionVerifier};
use roomhub_core::config::AppConfig;
use roomhub_database::{BookingStore, SessionLookup};
use roomhub_service::BookingService;

/// Cloneable handle to configuration and services.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Booking read/create/move
    pub booking_service: Arc<BookingService>,
    /// Bearer token verification
    pub verifier: Arc<dyn IdentityVerifier>,
}

impl AppState {
    /// Wire services over the given store backend.
    pub fn new(
        config: AppConfig,
        store: Arc<dyn BookingStore>,
        sessions: Arc<dyn SessionLookup>,
    ) -> Self {
        let decoder = Arc::new(JwtDecoder::new(&config.auth));
        let verifier: Arc<dyn IdentityVerifier> =
            Arc::new(SessionVerifier::new(decoder, sessions));
        let booking_service = Arc::new(BookingService::new(store));

        Self {
            config: Arc::new(config),
            booking_service,
            verifier,
        }
    }
}
