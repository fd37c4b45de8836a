// src/models/chat.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Turno de chat persistido como registro de auditoría. Solo se escribe;
/// el núcleo nunca lo vuelve a leer.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChatTurn {
    pub user_id: Uuid,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChatPayload {
    #[validate(length(min = 1, message = "El mensaje es obligatorio."))]
    #[schema(example = "¿Qué es el IRPF?")]
    pub message: String,

    // Se acepta pero el selector de respuestas todavía no lo consulta;
    // queda reservado para un respondedor con contexto.
    #[serde(default)]
    #[schema(value_type = Vec<Object>)]
    pub chat_history: Vec<Value>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ChatResponse {
    pub response: String,
    #[schema(example = json!(["Base de conocimientos Fiscal IA", "Normativa fiscal española"]))]
    pub sources: Vec<String>,
}
