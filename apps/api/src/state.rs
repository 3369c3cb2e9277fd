use std::sync::Arc;

use crate::config::Config;
use crate::markdown::MarkdownResumeParser;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Compiled once at startup; parsing only reads it.
    pub parser: Arc<MarkdownResumeParser>,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, regex::Error> {
        Ok(AppState {
            config,
            parser: Arc::new(MarkdownResumeParser::new()?),
        })
    }
}
