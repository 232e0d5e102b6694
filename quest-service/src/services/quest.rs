//! Quest generation: prompt, provider call, parse, validate.

use super::output::parse_quest_response;
use super::prompt::render_prompt;
use super::providers::{ProviderError, TextProvider};
use crate::models::{QuestRequest, QuestResponse};
use service_core::error::AppError;
use std::sync::Arc;
use thiserror::Error;

/// Message returned to callers when the model reply cannot be used.
pub const MALFORMED_OUTPUT_MESSAGE: &str = "AI返回的JSON格式错误";

/// Categories the prompt asks the model to spread tasks across.
pub const MIN_DISTINCT_CATEGORIES: usize = 4;

#[derive(Debug, Error)]
pub enum QuestError {
    /// The reply was not JSON, even after removing code fences.
    #[error("model output is not valid JSON: {0}")]
    MalformedOutput(#[source] serde_json::Error),

    /// The reply was JSON but not shaped like a quest list.
    #[error("model output does not match the quest schema: {0}")]
    SchemaViolation(#[source] serde_json::Error),

    #[error(transparent)]
    Provider(#[from] ProviderError),
}

impl From<QuestError> for AppError {
    fn from(err: QuestError) -> Self {
        match err {
            QuestError::MalformedOutput(_) | QuestError::SchemaViolation(_) => {
                AppError::InternalError(MALFORMED_OUTPUT_MESSAGE.to_string())
            }
            QuestError::Provider(e) => AppError::InternalError(format!("服务器内部错误: {}", e)),
        }
    }
}

/// Generates quests for a location. Cheap to clone; holds no per-request state.
#[derive(Clone)]
pub struct QuestService {
    provider: Arc<dyn TextProvider>,
}

impl QuestService {
    pub fn new(provider: Arc<dyn TextProvider>) -> Self {
        Self { provider }
    }

    /// Run one generation round trip. No retries: every failure is final.
    pub async fn generate(&self, request: &QuestRequest) -> Result<QuestResponse, QuestError> {
        tracing::info!(
            location = %request.location,
            theme = %request.theme,
            "Received quest generation request"
        );

        let prompt = render_prompt(&request.location, request.theme);

        let reply = self.provider.generate(&prompt).await.map_err(|e| {
            tracing::error!(error = %e, "Quest generation provider call failed");
            QuestError::from(e)
        })?;

        tracing::debug!(
            input_tokens = reply.input_tokens,
            output_tokens = reply.output_tokens,
            finish_reason = ?reply.finish_reason,
            "Provider reply received"
        );

        let quests = parse_quest_response(&reply.text).map_err(|e| {
            match &e {
                QuestError::MalformedOutput(err) => tracing::error!(
                    error = %err,
                    raw_response = %reply.text,
                    "Failed to decode JSON from model response"
                ),
                QuestError::SchemaViolation(err) => tracing::error!(
                    error = %err,
                    raw_response = %reply.text,
                    "Model response does not match quest schema"
                ),
                QuestError::Provider(_) => {}
            }
            e
        })?;

        // Asked of the model, reported here, never enforced.
        let distinct = quests.distinct_categories();
        if distinct < MIN_DISTINCT_CATEGORIES {
            tracing::warn!(
                distinct_categories = distinct,
                expected_at_least = MIN_DISTINCT_CATEGORIES,
                "Model returned fewer distinct categories than requested"
            );
        }

        Ok(quests)
    }
}
