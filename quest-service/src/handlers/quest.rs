use axum::{extract::State, Json};
use service_core::error::AppError;

use crate::models::{QuestRequest, QuestResponse};
use crate::startup::AppState;
use crate::utils::ValidatedJson;

/// `POST /api/v1/generate-quest`
pub async fn generate_quest(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<QuestRequest>,
) -> Result<Json<QuestResponse>, AppError> {
    let quests = state.quest_service.generate(&req).await?;
    Ok(Json(quests))
}
