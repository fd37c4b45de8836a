use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// Nuestro tipo de error, con `thiserror` para mejor ergonomía.
// Cubre toda la taxonomía del servicio: autenticación, validación,
// autorización por prefijo de clave y fallos de los colaboradores externos.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Error de validación")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("El email ya existe")]
    EmailAlreadyExists,

    #[error("Credenciales inválidas")]
    InvalidCredentials,

    #[error("Token inválido")]
    InvalidToken,

    // La clave no pertenece al tenant autenticado. No revelamos si el
    // recurso existe o no.
    #[error("Acceso denegado al recurso")]
    Forbidden,

    // Fallo del almacén clave-valor o de otro colaborador externo.
    #[error("Error del almacén de datos")]
    StoreError(#[from] anyhow::Error),

    // Un registro guardado no se pudo (de)serializar.
    #[error("Error de serialización")]
    SerializationError(#[from] serde_json::Error),

    #[error("Error de Bcrypt: {0}")]
    BcryptError(#[from] bcrypt::BcryptError),

    #[error("Error de JWT: {0}")]
    JwtError(#[from] jsonwebtoken::errors::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            // Devolvemos todos los detalles de la validación, campo a campo.
            AppError::ValidationError(errors) => {
                let mut details = std::collections::HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors
                        .iter()
                        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                        .collect();
                    details.insert(field.to_string(), messages);
                }
                let body = Json(json!({
                    "error": "Uno o más campos son inválidos.",
                    "details": details,
                }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }
            AppError::EmailAlreadyExists => (StatusCode::CONFLICT, "Este email ya está en uso."),
            AppError::InvalidCredentials => {
                (StatusCode::UNAUTHORIZED, "Email o contraseña inválidos.")
            }
            AppError::InvalidToken => (
                StatusCode::UNAUTHORIZED,
                "Token de autenticación inválido o ausente.",
            ),
            AppError::Forbidden => (
                StatusCode::FORBIDDEN,
                "No tienes permiso para acceder a este recurso.",
            ),

            // El resto (StoreError, SerializationError, etc.) se convierte en 500.
            // `tracing` registra el detalle; al cliente nunca le llega la causa.
            ref e => {
                tracing::error!("Error interno del servidor: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Ocurrió un error inesperado.",
                )
            }
        };

        // Respuesta estándar para los errores que solo llevan un mensaje.
        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}
