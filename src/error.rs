//! Unified error types for pantry-tools.
//!
//! This module provides the error hierarchy for the library, with context
//! chaining for debugging and user-facing messages. Every error is scoped to
//! the single operation that raised it; none is fatal to the process.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for pantry-tools operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum PantryError {
    /// Errors talking to a REST collaborator
    #[error("Request failed: {context}")]
    Client {
        context: String,
        #[source]
        source: ClientErrorKind,
    },

    /// A calendar date that could not be parsed
    #[error("Invalid date '{value}': {reason}")]
    InvalidDate { value: String, reason: String },

    /// A quantity that is negative or not a number
    #[error("Invalid quantity {value}: must be a non-negative number")]
    InvalidQuantity { value: f64 },

    /// Client-side form validation rejected the input; no request was sent
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    /// Malformed payloads (JSON snapshots, session files)
    #[error("Failed to parse {context}: {message}")]
    Parse { context: String, message: String },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Session errors (missing or undecodable token)
    #[error("Session error: {0}")]
    Session(String),
}

/// Specific client error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ClientErrorKind {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API returned status {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Not authenticated: {0}")]
    Unauthorized(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

// ============================================================================
// Field validation errors
// ============================================================================

/// A single rejected form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Form field name (e.g. `quantity`)
    pub field: String,
    /// Human-readable reason
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// All field errors collected from one form submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    pub errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(FieldError::new(field, message));
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Whether a given field was rejected.
    pub fn has_field(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    /// `Ok(value)` when nothing was rejected.
    pub fn into_result<T>(self, value: T) -> std::result::Result<T, Self> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.errors.iter().map(ToString::to_string).collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for pantry-tools operations
pub type Result<T> = std::result::Result<T, PantryError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl PantryError {
    /// Create a client error with context
    pub fn client(context: impl Into<String>, source: ClientErrorKind) -> Self {
        Self::Client {
            context: context.into(),
            source,
        }
    }

    /// Create a network error for a failed request
    pub fn network(context: impl Into<String>, message: impl Into<String>) -> Self {
        Self::client(context, ClientErrorKind::Network(message.into()))
    }

    /// Create an error for a non-success HTTP status
    pub fn api_status(context: impl Into<String>, status: u16, body: impl Into<String>) -> Self {
        Self::client(
            context,
            ClientErrorKind::Api {
                status,
                body: body.into(),
            },
        )
    }

    /// Create an error for an operation that needs a session token
    pub fn unauthorized(context: impl Into<String>) -> Self {
        let context = context.into();
        Self::client(
            context.clone(),
            ClientErrorKind::Unauthorized(format!("log in before {context}")),
        )
    }

    /// Create an invalid date error
    pub fn invalid_date(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidDate {
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid quantity error
    pub fn invalid_quantity(value: f64) -> Self {
        Self::InvalidQuantity { value }
    }

    /// Create a parse error
    pub fn parse(context: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            context: context.into(),
            message: message.into(),
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let message = format!("{source}");
        Self::Io {
            path: Some(path.into()),
            message,
            source,
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a session error
    pub fn session(message: impl Into<String>) -> Self {
        Self::Session(message.into())
    }

    /// Whether the error came from a failed fetch/mutation call.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Client { .. })
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<std::io::Error> for PantryError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for PantryError {
    fn from(err: serde_json::Error) -> Self {
        Self::parse("JSON", err.to_string())
    }
}

impl From<ValidationErrors> for PantryError {
    fn from(err: ValidationErrors) -> Self {
        Self::Validation(err)
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// The context string is prepended to the error's existing context, so a
/// failure deep in a reload reads like `reloading pantry: listing items: ...`.
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure (lazy evaluation).
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<PantryError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

/// Add context to an error, chaining with any existing context.
fn add_context_to_error(err: PantryError, new_ctx: &str) -> PantryError {
    match err {
        PantryError::Client {
            context: existing,
            source,
        } => PantryError::Client {
            context: chain_context(new_ctx, &existing),
            source,
        },
        PantryError::Parse {
            context: existing,
            message,
        } => PantryError::Parse {
            context: chain_context(new_ctx, &existing),
            message,
        },
        PantryError::Io {
            path,
            message,
            source,
        } => PantryError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        PantryError::Config(msg) => PantryError::Config(chain_context(new_ctx, &msg)),
        PantryError::Session(msg) => PantryError::Session(chain_context(new_ctx, &msg)),
        // Date and field errors already name the offending value.
        other @ (PantryError::InvalidDate { .. }
        | PantryError::InvalidQuantity { .. }
        | PantryError::Validation(_)) => other,
    }
}

/// Chain two context strings together.
///
/// If the existing context is empty, returns just the new context.
/// Otherwise, returns "`new_context`: `existing_context`".
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}
