//! Login and registration.

use super::http::{ApiClient, Auth};
use crate::error::Result;
use crate::model::{AuthResponse, LoginRequest, RegisterRequest};
use reqwest::Method;

#[derive(Debug, Clone)]
pub struct AuthClient {
    api: ApiClient,
}

impl AuthClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Log in and record the result on the shared session.
    pub fn login(&self, credentials: &LoginRequest) -> Result<AuthResponse> {
        let response: AuthResponse = self.api.send_json(
            Method::POST,
            "/auth/login",
            credentials,
            Auth::Anonymous,
            "logging in",
        )?;
        self.api.session().login(&response);
        Ok(response)
    }

    /// Register a new account. Returns the server's confirmation message.
    pub fn register(&self, user: &RegisterRequest) -> Result<String> {
        self.api.send_for_text(
            Method::POST,
            "/auth/register",
            user,
            Auth::Anonymous,
            "registering",
        )
    }

    pub fn logout(&self) {
        self.api.session().logout();
    }
}
