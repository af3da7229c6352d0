//! Shared HTTP plumbing.

use crate::error::{ClientErrorKind, PantryError, Result};
use crate::session::SessionContext;
use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

/// HTTP client configuration.
#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    /// Gateway base URL, without a trailing slash
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
    /// Extra attempts for failed GET requests
    pub max_retries: u8,
}

impl Default for ApiClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            timeout: Duration::from_secs(30),
            max_retries: 0,
        }
    }
}

/// Whether a request carries the session headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Auth {
    /// Send bearer token and user id; fail fast when logged out
    Required,
    Anonymous,
}

/// HTTP client shared by the endpoint clients.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    config: ApiClientConfig,
    session: Arc<SessionContext>,
}

/// Helper to convert reqwest errors to client errors
fn network_error(context: &str, err: reqwest::Error) -> PantryError {
    PantryError::network(context, err.to_string())
}

impl ApiClient {
    pub fn new(config: ApiClientConfig, session: Arc<SessionContext>) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .map_err(|e| network_error("creating HTTP client", e))?;

        Ok(Self {
            client,
            config,
            session,
        })
    }

    pub fn session(&self) -> &Arc<SessionContext> {
        &self.session
    }

    pub fn config(&self) -> &ApiClientConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.config.base_url.trim_end_matches('/'))
    }

    fn request(
        &self,
        method: Method,
        path: &str,
        auth: Auth,
        context: &str,
    ) -> Result<RequestBuilder> {
        let url = self.url(path);
        tracing::debug!("{method} {url}");
        let builder = self.client.request(method, url);
        match auth {
            Auth::Anonymous => Ok(builder),
            Auth::Required => {
                let token = self
                    .session
                    .token()
                    .ok_or_else(|| PantryError::unauthorized(context))?;
                let builder = builder.bearer_auth(token);
                let user_id = self.session.user_id();
                Ok(if user_id.is_empty() {
                    builder
                } else {
                    builder.header("User-Id", user_id)
                })
            }
        }
    }

    fn send(builder: RequestBuilder, context: &str) -> Result<Response> {
        let response = builder.send().map_err(|e| network_error(context, e))?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().unwrap_or_default();
        if status.as_u16() == 401 || status.as_u16() == 403 {
            return Err(PantryError::client(
                context,
                ClientErrorKind::Unauthorized(format!("server answered {status}")),
            ));
        }
        Err(PantryError::api_status(context, status.as_u16(), body))
    }

    fn decode<T: DeserializeOwned>(response: Response, context: &str) -> Result<T> {
        response.json().map_err(|e| {
            PantryError::client(context, ClientErrorKind::InvalidResponse(e.to_string()))
        })
    }

    /// GET and decode JSON, retrying network errors and 5xx answers.
    pub fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        auth: Auth,
        context: &str,
    ) -> Result<T> {
        let mut last_error = None;

        for attempt in 0..=self.config.max_retries {
            if attempt > 0 {
                // Exponential backoff: 1s, 2s, 4s, ...
                let delay = Duration::from_secs(1 << (attempt - 1).min(5));
                std::thread::sleep(delay);
                tracing::debug!("Retry attempt {} after {:?}", attempt, delay);
            }

            let builder = self.request(Method::GET, path, auth, context)?.query(query);
            match Self::send(builder, context) {
                Ok(response) => return Self::decode(response, context),
                Err(e) if is_retryable(&e) => {
                    tracing::debug!("GET {path} attempt {} failed: {e}", attempt + 1);
                    last_error = Some(e);
                }
                Err(e) => return Err(e),
            }
        }

        Err(last_error.unwrap_or_else(|| PantryError::network(context, "no attempt was made")))
    }

    /// Send a JSON body and decode a JSON answer. Never retried.
    pub fn send_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &B,
        auth: Auth,
        context: &str,
    ) -> Result<T> {
        let builder = self.request(method, path, auth, context)?.json(body);
        Self::decode(Self::send(builder, context)?, context)
    }

    /// Send a JSON body and return the answer as text.
    pub fn send_for_text<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: &B,
        auth: Auth,
        context: &str,
    ) -> Result<String> {
        let builder = self.request(method, path, auth, context)?.json(body);
        Self::send(builder, context)?
            .text()
            .map_err(|e| network_error(context, e))
    }

    /// DELETE, ignoring any response body.
    pub fn delete(&self, path: &str, context: &str) -> Result<()> {
        let builder = self.request(Method::DELETE, path, Auth::Required, context)?;
        Self::send(builder, context)?;
        Ok(())
    }
}

fn is_retryable(err: &PantryError) -> bool {
    match err {
        PantryError::Client { source, .. } => match source {
            ClientErrorKind::Network(_) => true,
            ClientErrorKind::Api { status, .. } => *status >= 500,
            _ => false,
        },
        _ => false,
    }
}
