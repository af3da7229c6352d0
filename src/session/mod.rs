//! Signed-in session state shared by the REST clients.
//!
//! [`SessionContext`] is created once and handed to every client that needs
//! the bearer token or user id. Interested parties call
//! [`SessionContext::subscribe`] to hear about logins and logouts.

mod context;
mod jwt;
mod store;

pub use context::{SessionContext, SessionEvent};
pub use jwt::{decode_claims, JwtClaims};
pub use store::{SessionStore, StoredSession};
