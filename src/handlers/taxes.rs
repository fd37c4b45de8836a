// src/handlers/taxes.rs

use axum::Json;

use crate::{
    common::error::AppError,
    middleware::auth::AuthenticatedUser,
    models::taxes::{Model130Payload, Model130Result, Model303Payload, Model303Result},
    services::taxes,
};

// POST /taxes/model303
#[utoipa::path(
    post,
    path = "/taxes/model303",
    tag = "Taxes",
    request_body = Model303Payload,
    responses(
        (status = 200, description = "Resultado de la autoliquidación de IVA", body = Model303Result),
        (status = 401, description = "No autenticado")
    ),
    security(("api_jwt" = []))
)]
pub async fn model_303(
    AuthenticatedUser(_identity): AuthenticatedUser,
    Json(payload): Json<Model303Payload>,
) -> Result<Json<Model303Result>, AppError> {
    Ok(Json(taxes::model_303(payload.cuota_iva, payload.iva_deducible)))
}

// POST /taxes/model130
#[utoipa::path(
    post,
    path = "/taxes/model130",
    tag = "Taxes",
    request_body = Model130Payload,
    responses(
        (status = 200, description = "Resultado del pago fraccionado de IRPF", body = Model130Result),
        (status = 401, description = "No autenticado")
    ),
    security(("api_jwt" = []))
)]
pub async fn model_130(
    AuthenticatedUser(_identity): AuthenticatedUser,
    Json(payload): Json<Model130Payload>,
) -> Result<Json<Model130Result>, AppError> {
    Ok(Json(taxes::model_130(
        payload.ingresos,
        payload.gastos,
        payload.pagos_previos,
    )))
}
