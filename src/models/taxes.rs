// src/models/taxes.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Totales derivados de una línea de factura. Sin redondeo interno: el
/// redondeo a dos decimales es cosa de la presentación y no debe volver a
/// los valores guardados.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceTotals {
    pub subtotal: Decimal,
    pub iva: Decimal,
    pub irpf: Decimal,
    pub total: Decimal,
}

// Entrada del modelo 303 (autoliquidación trimestral de IVA)
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Model303Payload {
    #[serde(default, rename = "cuotaIVA")]
    #[schema(example = "2100.0")]
    pub cuota_iva: Decimal,

    #[serde(default)]
    #[schema(example = "500.0")]
    pub iva_deducible: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Model303Result {
    pub cuota_devengada: Decimal,
    pub cuota_deducible: Decimal,
    pub resultado: Decimal,
    pub a_ingresar: Decimal,
    pub a_compensar: Decimal,
}

// Entrada del modelo 130 (pago fraccionado de IRPF)
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Model130Payload {
    #[serde(default)]
    #[schema(example = "15000.0")]
    pub ingresos: Decimal,

    #[serde(default)]
    #[schema(example = "5000.0")]
    pub gastos: Decimal,

    #[serde(default)]
    #[schema(example = "0.0")]
    pub pagos_previos: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Model130Result {
    pub rendimiento_neto: Decimal,
    pub cuota_tributaria: Decimal,
    pub resultado: Decimal,
}
