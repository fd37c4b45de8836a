// src/handlers/documents.rs

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::auth::AuthenticatedUser,
    models::documents::{DeleteResponse, DocumentListResponse},
};

// GET /documents
#[utoipa::path(
    get,
    path = "/documents",
    tag = "Documents",
    responses(
        (status = 200, description = "Documentos del tenant", body = DocumentListResponse),
        (status = 401, description = "No autenticado")
    ),
    security(("api_jwt" = []))
)]
pub async fn list_documents(
    State(app_state): State<AppState>,
    AuthenticatedUser(identity): AuthenticatedUser,
) -> Result<Json<DocumentListResponse>, AppError> {
    let documents = app_state.resources.list_documents(identity.id).await?;

    Ok(Json(DocumentListResponse { documents }))
}

// DELETE /documents/{id}
#[utoipa::path(
    delete,
    path = "/documents/{id}",
    tag = "Documents",
    params(
        ("id" = String, Path, description = "Clave completa del documento")
    ),
    responses(
        (status = 200, description = "Documento borrado", body = DeleteResponse),
        (status = 401, description = "No autenticado"),
        (status = 403, description = "La clave no pertenece al tenant")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_document(
    State(app_state): State<AppState>,
    AuthenticatedUser(identity): AuthenticatedUser,
    Path(document_id): Path<String>,
) -> Result<Json<DeleteResponse>, AppError> {
    app_state
        .resources
        .delete_document(identity.id, &document_id)
        .await?;

    Ok(Json(DeleteResponse { success: true }))
}

// POST /documents/reconcile — repara facturas huérfanas de la doble escritura
#[utoipa::path(
    post,
    path = "/documents/reconcile",
    tag = "Documents",
    responses(
        (status = 200, description = "Documentos re-derivados de las facturas", body = DocumentListResponse),
        (status = 401, description = "No autenticado")
    ),
    security(("api_jwt" = []))
)]
pub async fn reconcile_documents(
    State(app_state): State<AppState>,
    AuthenticatedUser(identity): AuthenticatedUser,
) -> Result<Json<DocumentListResponse>, AppError> {
    let documents = app_state.resources.reconcile_documents(identity.id).await?;

    Ok(Json(DocumentListResponse { documents }))
}
