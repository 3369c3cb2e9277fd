//! Axum route handlers for the Markdown API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::AppError;
use crate::markdown::{generate_markdown, GeneratedMarkdown};
use crate::models::draft::ResumeDocument;
use crate::models::parsed::ParsedResume;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ParseMarkdownRequest {
    #[serde(default)]
    pub markdown: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ParseMarkdownResponse {
    pub parsed: Option<ParsedResume>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/markdown/parse
///
/// Parses stored or AI-produced markdown into structured résumé data.
/// Absent or blank markdown yields `{"parsed": null}`.
pub async fn handle_parse_markdown(
    State(state): State<AppState>,
    Json(request): Json<ParseMarkdownRequest>,
) -> Result<Json<ParseMarkdownResponse>, AppError> {
    let limit = state.config.max_markdown_bytes;
    if let Some(markdown) = &request.markdown {
        if markdown.len() > limit {
            warn!(
                "Rejected markdown payload of {} bytes (limit {limit})",
                markdown.len()
            );
            return Err(AppError::Validation(format!(
                "markdown exceeds the {limit} byte limit"
            )));
        }
    }

    let parsed = state.parser.parse(request.markdown.as_deref());
    Ok(Json(ParseMarkdownResponse { parsed }))
}

/// POST /api/v1/markdown/generate
///
/// Serializes editor draft data into markdown for preview and storage.
pub async fn handle_generate_markdown(
    Json(draft): Json<ResumeDocument>,
) -> Json<GeneratedMarkdown> {
    Json(generate_markdown(&draft))
}
