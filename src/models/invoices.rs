// src/models/invoices.rs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Factura emitida por un tenant.
///
/// `client_id` es una referencia blanda: no se valida al escribir, y si el
/// cliente ya no existe la capa de presentación lo degrada a "desconocido".
/// Los totales los calcula siempre el motor fiscal del servidor.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    #[schema(example = "invoice:550e8400-e29b-41d4-a716-446655440000:1714000000000")]
    pub id: String,

    pub user_id: Uuid,

    #[serde(default)]
    #[schema(example = "client:550e8400-e29b-41d4-a716-446655440000:1713000000000")]
    pub client_id: String,

    #[serde(default)]
    #[schema(example = "Desarrollo web")]
    pub concept: String,

    #[schema(example = "100.0")]
    pub unit_price: Decimal,
    #[schema(example = "2.0")]
    pub quantity: Decimal,
    #[schema(example = "21.0")]
    pub iva_percentage: Decimal,
    #[schema(example = "15.0")]
    pub irpf_percentage: Decimal,

    #[schema(example = "200.0")]
    pub subtotal: Decimal,
    #[schema(example = "42.0")]
    pub iva: Decimal,
    #[schema(example = "30.0")]
    pub irpf: Decimal,
    #[schema(example = "212.0")]
    pub total: Decimal,

    #[schema(value_type = String, format = Date, example = "2024-04-25")]
    pub date: NaiveDate,

    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct InvoiceResponse {
    pub invoice: Invoice,
}
