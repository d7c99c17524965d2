//! # roomhub-auth
//!
//! Turns a bearer token into a verified user id. A token is accepted only
//! when its signature and expiry are valid *and* a session row for it
//! still exists.

pub mod jwt;
pub mod verifier;

pub use jwt::{Claims, JwtDecoder, JwtEncoder};
pub use verifier::{IdentityVerifier, SessionVerifier};
