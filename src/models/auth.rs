// src/models/auth.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

fn default_user_type() -> String {
    "particular".to_string()
}

/// Perfil espejado en el almacén bajo `user:{tenantId}`.
///
/// Se crea en el registro y solo lo muta su propio tenant vía
/// actualización de perfil. Nunca se borra.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: Uuid,
    #[schema(example = "ana@ejemplo.es")]
    pub email: String,
    #[serde(default)]
    #[schema(example = "Ana")]
    pub name: String,
    #[serde(default)]
    #[schema(example = "García")]
    pub last_name: String,
    #[serde(default = "default_user_type")]
    #[schema(example = "autonomo")]
    pub user_type: String,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

// Datos para el registro de un nuevo usuario
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserPayload {
    #[validate(length(min = 1, message = "El nombre es obligatorio."))]
    #[schema(example = "Ana")]
    pub name: String,

    #[validate(length(min = 1, message = "Los apellidos son obligatorios."))]
    #[schema(example = "García")]
    pub last_name: String,

    #[validate(email(message = "El email proporcionado es inválido."))]
    #[schema(example = "ana@ejemplo.es")]
    pub email: String,

    #[validate(length(min = 6, message = "La contraseña debe tener al menos 6 caracteres."))]
    pub password: String,

    #[serde(default = "default_user_type")]
    #[schema(example = "autonomo")]
    pub user_type: String,
}

// Datos para el login
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginUserPayload {
    #[validate(email(message = "El email proporcionado es inválido."))]
    #[schema(example = "ana@ejemplo.es")]
    pub email: String,

    #[validate(length(min = 1, message = "La contraseña es obligatoria."))]
    pub password: String,
}

/// Sesión devuelta por registro y login: perfil mínimo más el token.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub last_name: String,
    pub user_type: String,
    pub access_token: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AuthResponse {
    pub user: SessionUser,
}

/// Respuesta de la actualización de perfil. El perfil fusionado conserva
/// cualquier campo adicional que el cliente haya enviado, de ahí el JSON
/// libre en lugar de `Profile`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ProfileResponse {
    #[schema(value_type = Object)]
    pub user: serde_json::Value,
}
