use axum::{Json, extract::State, http::StatusCode};
use std::sync::Arc;
use std::time::Instant;
use tracing::Instrument;

use crate::assistant::LegalAssistant;

use super::models::{AskRequest, AskResponse};

pub async fn ask_handler(
    State(assistant): State<Arc<LegalAssistant>>,
    Json(request): Json<AskRequest>,
) -> Result<Json<AskResponse>, (StatusCode, String)> {
    let start = Instant::now();
    let request_id = nanoid::nanoid!(10);
    let span = tracing::info_span!("ask", %request_id);

    async move {
        let answer = assistant.ask(&request.query).await.map_err(|e| {
            tracing::error!("search stage failed: {:#}", e);
            (StatusCode::BAD_GATEWAY, format!("Search error: {}", e))
        })?;

        tracing::info!(
            generated = answer.is_generated(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "answered query"
        );

        Ok::<_, (StatusCode, String)>(Json(AskResponse {
            response: answer.into_text(),
        }))
    }
    .instrument(span)
    .await
}
