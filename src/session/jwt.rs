//! Reading claims out of a JWT without verifying it.
//!
//! The server is the authority on token validity. The client only needs the
//! subject and roles to restore a session.

use crate::error::{PantryError, Result};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct JwtClaims {
    /// Username
    pub sub: String,
    #[serde(default)]
    pub roles: Vec<String>,
    /// Expiry, seconds since the epoch
    #[serde(default)]
    pub exp: Option<i64>,
}

/// Decode the payload segment of `header.payload.signature`.
pub fn decode_claims(token: &str) -> Result<JwtClaims> {
    let payload = token
        .split('.')
        .nth(1)
        .filter(|segment| !segment.is_empty())
        .ok_or_else(|| PantryError::session("token has no payload segment"))?;

    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|e| PantryError::session(format!("token payload is not base64url: {e}")))?;

    serde_json::from_slice(&bytes)
        .map_err(|e| PantryError::session(format!("token payload is not valid claims: {e}")))
}
