// src/handlers/auth.rs

use axum::{extract::State, Json};
use serde_json::Value;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::auth::AuthenticatedUser,
    models::auth::{AuthResponse, LoginUserPayload, ProfileResponse, RegisterUserPayload},
};

// Handler de registro
#[utoipa::path(
    post,
    path = "/auth/register",
    tag = "Auth",
    request_body = RegisterUserPayload,
    responses(
        (status = 200, description = "Cuenta creada y sesión iniciada", body = AuthResponse),
        (status = 400, description = "Datos inválidos"),
        (status = 409, description = "El email ya está en uso")
    )
)]
pub async fn register(
    State(app_state): State<AppState>,
    Json(payload): Json<RegisterUserPayload>,
) -> Result<Json<AuthResponse>, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let user = app_state.auth.register(payload).await?;

    Ok(Json(AuthResponse { user }))
}

// Handler de login
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = "Auth",
    request_body = LoginUserPayload,
    responses(
        (status = 200, description = "Sesión iniciada", body = AuthResponse),
        (status = 401, description = "Credenciales inválidas")
    )
)]
pub async fn login(
    State(app_state): State<AppState>,
    Json(payload): Json<LoginUserPayload>,
) -> Result<Json<AuthResponse>, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let user = app_state
        .auth
        .login(&payload.email, &payload.password)
        .await?;

    Ok(Json(AuthResponse { user }))
}

// PUT /user/profile — fusiona campos parciales sobre el perfil guardado
#[utoipa::path(
    put,
    path = "/user/profile",
    tag = "Users",
    request_body = Value,
    responses(
        (status = 200, description = "Perfil actualizado", body = ProfileResponse),
        (status = 401, description = "No autenticado")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_profile(
    State(app_state): State<AppState>,
    AuthenticatedUser(identity): AuthenticatedUser,
    Json(partial_fields): Json<Value>,
) -> Result<Json<ProfileResponse>, AppError> {
    let user = app_state
        .resources
        .update_profile(identity.id, partial_fields)
        .await?;

    Ok(Json(ProfileResponse { user }))
}
