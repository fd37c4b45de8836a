// src/models/documents.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentType {
    Invoice,
    TaxModel,
    Receipt,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    Completed,
    Draft,
    Pending,
}

/// Entrada desnormalizada del centro de documentos. Las de tipo factura se
/// crean como efecto lateral de `POST /invoices` y guardan la referencia a
/// su factura; se pueden borrar con independencia de ella.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[schema(example = "document:550e8400-e29b-41d4-a716-446655440000:1714000000000")]
    pub id: String,

    #[schema(example = "Factura - Desarrollo web")]
    pub name: String,

    #[serde(rename = "type")]
    pub kind: DocumentType,

    #[schema(value_type = String, format = Date, example = "2024-04-25")]
    pub date: NaiveDate,

    #[schema(example = "45 KB")]
    pub size: String,

    pub status: DocumentStatus,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_id: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DocumentListResponse {
    pub documents: Vec<Document>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteResponse {
    #[schema(example = true)]
    pub success: bool,
}
