use axum::{http::StatusCode, Json};
use contracts::shared::chatbot::{ChatRequest, ChatResponse};

use crate::shared::chatbot;

/// GET /api/chatbot
pub async fn greeting() -> Json<ChatResponse> {
    Json(ChatResponse {
        reply: chatbot::GREETING.to_string(),
    })
}

/// POST /api/chatbot
pub async fn reply(Json(request): Json<ChatRequest>) -> Result<Json<ChatResponse>, StatusCode> {
    let reply = chatbot::respond(&request.message).ok_or(StatusCode::BAD_REQUEST)?;
    Ok(Json(ChatResponse {
        reply: reply.to_string(),
    }))
}
