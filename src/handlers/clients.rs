// src/handlers/clients.rs

use axum::{extract::State, Json};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::auth::AuthenticatedUser,
    models::clients::{ClientListResponse, ClientResponse},
};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateClientPayload {
    #[validate(length(min = 1, message = "El nombre es obligatorio."))]
    #[schema(example = "Estudio Mendez SL")]
    pub name: String,

    #[validate(length(min = 1, message = "El NIF es obligatorio."))]
    #[schema(example = "B12345678")]
    pub nif: String,

    #[schema(example = "Calle Mayor 1, Madrid")]
    pub address: Option<String>,
}

// GET /clients
#[utoipa::path(
    get,
    path = "/clients",
    tag = "Clients",
    responses(
        (status = 200, description = "Clientes del tenant", body = ClientListResponse),
        (status = 401, description = "No autenticado")
    ),
    security(("api_jwt" = []))
)]
pub async fn list_clients(
    State(app_state): State<AppState>,
    AuthenticatedUser(identity): AuthenticatedUser,
) -> Result<Json<ClientListResponse>, AppError> {
    let clients = app_state.resources.list_clients(identity.id).await?;

    Ok(Json(ClientListResponse { clients }))
}

// POST /clients
#[utoipa::path(
    post,
    path = "/clients",
    tag = "Clients",
    request_body = CreateClientPayload,
    responses(
        (status = 200, description = "Cliente creado", body = ClientResponse),
        (status = 400, description = "Falta el nombre o el NIF"),
        (status = 401, description = "No autenticado")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_client(
    State(app_state): State<AppState>,
    AuthenticatedUser(identity): AuthenticatedUser,
    Json(payload): Json<CreateClientPayload>,
) -> Result<Json<ClientResponse>, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let client = app_state
        .resources
        .create_client(identity.id, &payload.name, &payload.nif, payload.address)
        .await?;

    Ok(Json(ClientResponse { client }))
}
