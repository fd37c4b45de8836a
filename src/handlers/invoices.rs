// src/handlers/invoices.rs

use axum::{extract::State, Json};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::auth::AuthenticatedUser,
    models::invoices::InvoiceResponse,
};

// Los campos numéricos ausentes se tratan como 0 (el motor fiscal exige
// entradas numéricas). Los totales que lleguen en el cuerpo se descartan:
// los recalcula el servidor.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateInvoicePayload {
    #[serde(default)]
    #[schema(example = "client:550e8400-e29b-41d4-a716-446655440000:1713000000000")]
    pub client_id: String,

    #[serde(default)]
    #[schema(example = "Desarrollo web")]
    pub concept: String,

    #[serde(default)]
    #[schema(example = "100.0")]
    pub unit_price: Decimal,

    #[serde(default)]
    #[schema(example = "2.0")]
    pub quantity: Decimal,

    #[serde(default)]
    #[schema(example = "21.0")]
    pub iva_percentage: Decimal,

    #[serde(default)]
    #[schema(example = "15.0")]
    pub irpf_percentage: Decimal,

    #[schema(value_type = String, format = Date, example = "2024-04-25")]
    pub date: NaiveDate,
}

// POST /invoices
#[utoipa::path(
    post,
    path = "/invoices",
    tag = "Invoices",
    request_body = CreateInvoicePayload,
    responses(
        (status = 200, description = "Factura creada con su documento asociado", body = InvoiceResponse),
        (status = 401, description = "No autenticado")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_invoice(
    State(app_state): State<AppState>,
    AuthenticatedUser(identity): AuthenticatedUser,
    Json(payload): Json<CreateInvoicePayload>,
) -> Result<Json<InvoiceResponse>, AppError> {
    let invoice = app_state
        .resources
        .create_invoice(
            identity.id,
            payload.client_id,
            payload.concept,
            payload.unit_price,
            payload.quantity,
            payload.iva_percentage,
            payload.irpf_percentage,
            payload.date,
        )
        .await?;

    Ok(Json(InvoiceResponse { invoice }))
}
