//! Turning the model's raw reply into a [`QuestResponse`].

use super::quest::QuestError;
use crate::models::QuestResponse;

const FENCE: &str = "```";
const JSON_FENCE: &str = "```json";

/// Remove surrounding whitespace and a markdown code fence, if any.
///
/// Lenient on purpose: the opening and closing markers are stripped
/// independently, so a reply with only one of them is still accepted.
pub fn strip_code_fence(raw: &str) -> &str {
    let text = raw.trim();
    let text = text
        .strip_prefix(JSON_FENCE)
        .or_else(|| text.strip_prefix(FENCE))
        .unwrap_or(text);
    let text = text.strip_suffix(FENCE).unwrap_or(text);
    text.trim()
}

/// Parse and structurally validate a model reply.
///
/// Text that is not JSON is [`QuestError::MalformedOutput`]; JSON of the
/// wrong shape is [`QuestError::SchemaViolation`].
pub fn parse_quest_response(raw: &str) -> Result<QuestResponse, QuestError> {
    let payload = strip_code_fence(raw);

    let value: serde_json::Value =
        serde_json::from_str(payload).map_err(QuestError::MalformedOutput)?;

    serde_json::from_value(value).map_err(QuestError::SchemaViolation)
}
