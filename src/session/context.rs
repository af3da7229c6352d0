use super::jwt::decode_claims;
use crate::model::{AuthResponse, User};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Mutex, RwLock};

/// Login state changes, delivered to every subscriber.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    LoggedIn(User),
    LoggedOut,
}

#[derive(Debug, Default)]
struct SessionState {
    token: Option<String>,
    user: Option<User>,
}

/// Token and user for the current session.
///
/// Shared behind an `Arc`; all methods take `&self`.
#[derive(Debug, Default)]
pub struct SessionContext {
    state: RwLock<SessionState>,
    subscribers: Mutex<Vec<Sender<SessionEvent>>>,
}

impl SessionContext {
    /// An anonymous session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a session from a stored token.
    ///
    /// The user is read from the token's claims. A token that cannot be
    /// decoded leaves the session logged out.
    #[must_use]
    pub fn restore(token: &str) -> Self {
        let session = Self::new();
        match decode_claims(token) {
            Ok(claims) => {
                let user = User {
                    username: claims.sub,
                    roles: claims.roles,
                    ..User::default()
                };
                let mut state = session.state.write().expect("session lock poisoned");
                state.token = Some(token.to_string());
                state.user = Some(user);
            }
            Err(e) => {
                tracing::warn!("Discarding stored session: {e}");
            }
        }
        session
    }

    /// Record a successful login and notify subscribers.
    pub fn login(&self, response: &AuthResponse) {
        let user = User::from(response);
        {
            let mut state = self.state.write().expect("session lock poisoned");
            state.token = Some(response.token.clone());
            state.user = Some(user.clone());
        }
        tracing::info!("Logged in as {}", user.username);
        self.notify(&SessionEvent::LoggedIn(user));
    }

    /// Drop the token and notify subscribers.
    pub fn logout(&self) {
        {
            let mut state = self.state.write().expect("session lock poisoned");
            state.token = None;
            state.user = None;
        }
        tracing::info!("Logged out");
        self.notify(&SessionEvent::LoggedOut);
    }

    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.state.read().expect("session lock poisoned").token.clone()
    }

    #[must_use]
    pub fn current_user(&self) -> Option<User> {
        self.state.read().expect("session lock poisoned").user.clone()
    }

    /// The username, or an empty string when anonymous.
    #[must_use]
    pub fn user_id(&self) -> String {
        self.current_user()
            .map(|user| user.username)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.state.read().expect("session lock poisoned").token.is_some()
    }

    /// Receive every future login/logout event.
    pub fn subscribe(&self) -> Receiver<SessionEvent> {
        let (tx, rx) = channel();
        self.subscribers
            .lock()
            .expect("subscriber lock poisoned")
            .push(tx);
        rx
    }

    fn notify(&self, event: &SessionEvent) {
        let mut subscribers = self.subscribers.lock().expect("subscriber lock poisoned");
        // Dropped receivers are pruned here.
        subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }
}
