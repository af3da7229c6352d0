//! State shared by every command handler.

use crate::client::ApiClient;
use crate::config::AppConfig;
use crate::output::{auto_detect_format, should_use_color, write_output, OutputTarget};
use crate::reports::{ReportFormat, TableReporter};
use crate::session::{SessionContext, SessionStore};
use anyhow::Result;
use std::path::PathBuf;
use std::sync::Arc;

/// Resolved configuration plus the global flags.
#[derive(Debug, Clone, Default)]
pub struct CommandContext {
    pub config: AppConfig,
    pub quiet: bool,
    token: Option<String>,
}

impl CommandContext {
    #[must_use]
    pub fn new(config: AppConfig, quiet: bool) -> Self {
        Self {
            config,
            quiet,
            token: None,
        }
    }

    /// Use this token instead of the stored session.
    #[must_use]
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.is_empty());
        self
    }

    #[must_use]
    pub fn session_store(&self) -> Option<SessionStore> {
        self.config.session.store()
    }

    /// The session: an explicit token, else the stored one, else anonymous.
    pub fn session(&self) -> Result<Arc<SessionContext>> {
        if let Some(token) = &self.token {
            return Ok(Arc::new(SessionContext::restore(token)));
        }
        let session = match self.session_store() {
            Some(store) => store.restore_context()?,
            None => SessionContext::new(),
        };
        Ok(Arc::new(session))
    }

    pub fn api(&self) -> Result<ApiClient> {
        let client = ApiClient::new(self.config.api.client_config(), self.session()?)?;
        Ok(client)
    }

    /// Flag value first, then the configured file, then stdout.
    #[must_use]
    pub fn output_target(&self, file: Option<PathBuf>) -> OutputTarget {
        OutputTarget::from_option(file.or_else(|| self.config.output.file.clone()))
    }

    /// Concrete format for `target`, with `auto` resolved.
    #[must_use]
    pub fn format(&self, requested: Option<ReportFormat>, target: &OutputTarget) -> ReportFormat {
        auto_detect_format(requested.unwrap_or(self.config.output.format), target)
    }

    #[must_use]
    pub fn reporter(&self, target: &OutputTarget) -> TableReporter {
        if should_use_color(self.config.output.no_color) && target.is_terminal() {
            TableReporter::new()
        } else {
            TableReporter::new().no_color()
        }
    }

    pub fn emit(&self, content: &str, target: &OutputTarget) -> Result<()> {
        write_output(content, target, self.quiet)
    }

    /// Status line on stderr, unless quiet.
    pub fn status(&self, message: &str) {
        if !self.quiet {
            eprintln!("{message}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_format_is_kept() {
        let ctx = CommandContext::default();
        let target = OutputTarget::File("out.csv".into());
        assert_eq!(ctx.format(Some(ReportFormat::Csv), &target), ReportFormat::Csv);
    }

    #[test]
    fn test_configured_format_is_fallback() {
        let config = AppConfig::builder().output_format(ReportFormat::Table).build();
        let ctx = CommandContext::new(config, false);
        let target = OutputTarget::File("out.txt".into());
        assert_eq!(ctx.format(None, &target), ReportFormat::Table);
    }

    #[test]
    fn test_auto_to_file_is_json() {
        let ctx = CommandContext::default();
        let target = ctx.output_target(Some("out.json".into()));
        assert_eq!(ctx.format(None, &target), ReportFormat::Json);
    }

    #[test]
    fn test_empty_token_is_ignored() {
        let ctx = CommandContext::default().with_token(Some(String::new()));
        assert!(ctx.token.is_none());
    }
}
