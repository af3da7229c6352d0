//! Login, logout, registration and the password meter.

use super::context::CommandContext;
use crate::client::AuthClient;
use crate::forms::{password_strength, PasswordChecks};
use crate::model::{LoginRequest, RegisterRequest};
use crate::session::StoredSession;
use anyhow::{Context, Result};

/// Log in and persist the token for later commands.
pub fn run_login(ctx: &CommandContext, username: String, password: String) -> Result<()> {
    let auth = AuthClient::new(ctx.api()?);
    let response = auth.login(&LoginRequest { username, password })?;

    let store = ctx
        .session_store()
        .context("no config directory to keep the session in")?;
    store.save(&StoredSession {
        token: response.token.clone(),
    })?;
    ctx.status(&format!(
        "Logged in as {} (session saved to {})",
        response.username,
        store.path().display()
    ));
    Ok(())
}

pub fn run_logout(ctx: &CommandContext) -> Result<()> {
    if let Some(store) = ctx.session_store() {
        store.clear()?;
    }
    ctx.status("Logged out");
    Ok(())
}

pub fn run_register(ctx: &CommandContext, request: &RegisterRequest) -> Result<()> {
    if let Some(strength) = password_strength(&request.password) {
        tracing::debug!("Registering with a {}", strength.text().to_lowercase());
    }
    let message = AuthClient::new(ctx.api()?).register(request)?;
    ctx.status(if message.trim().is_empty() {
        "Registered"
    } else {
        message.trim()
    });
    Ok(())
}

/// Rating plus the checklist, one requirement per line.
#[must_use]
pub fn password_report(password: &str) -> String {
    let Some(strength) = password_strength(password) else {
        return "No password given".to_string();
    };
    let checks = PasswordChecks::evaluate(password);
    let mark = |ok: bool| if ok { "x" } else { " " };
    [
        strength.text().to_string(),
        format!("[{}] at least 6 characters", mark(checks.min_length)),
        format!("[{}] an uppercase letter", mark(checks.uppercase)),
        format!("[{}] a digit", mark(checks.digit)),
        format!("[{}] one of !@#$%^&*", mark(checks.special)),
    ]
    .join("\n")
}
