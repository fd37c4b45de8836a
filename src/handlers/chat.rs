// src/handlers/chat.rs

use axum::{extract::State, Json};
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::auth::AuthenticatedUser,
    models::chat::{ChatPayload, ChatResponse},
};

// POST /chat
#[utoipa::path(
    post,
    path = "/chat",
    tag = "Chat",
    request_body = ChatPayload,
    responses(
        (status = 200, description = "Respuesta del asistente", body = ChatResponse),
        (status = 400, description = "Mensaje ausente"),
        (status = 401, description = "No autenticado")
    ),
    security(("api_jwt" = []))
)]
pub async fn chat(
    State(app_state): State<AppState>,
    AuthenticatedUser(identity): AuthenticatedUser,
    Json(payload): Json<ChatPayload>,
) -> Result<Json<ChatResponse>, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let reply = app_state
        .chat
        .handle(identity.id, &payload.message, &payload.chat_history)
        .await?;

    Ok(Json(reply))
}
