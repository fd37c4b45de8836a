// src/db/kv.rs

use async_trait::async_trait;
use serde_json::Value;

use crate::common::error::AppError;

/// Contrato del almacén clave-valor externo.
///
/// Las claves son cadenas opacas; el esquema de nombres vive en `db::keys` y
/// ningún llamador elige claves crudas fuera de él. No hay transacciones
/// multi-clave: quien escriba varias claves seguidas debe tolerar escrituras
/// parciales.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Devuelve el registro bajo `key`, o `None` si no existe.
    async fn get(&self, key: &str) -> Result<Option<Value>, AppError>;

    /// Guarda (o sobrescribe) el registro bajo `key`.
    async fn set(&self, key: &str, value: Value) -> Result<(), AppError>;

    /// Borra la clave. Borrar una clave inexistente no es un error.
    async fn delete(&self, key: &str) -> Result<(), AppError>;

    /// Devuelve todos los registros cuya clave empieza por `prefix`.
    /// La ausencia de resultados es una lista vacía, nunca un error.
    async fn scan_by_prefix(&self, prefix: &str) -> Result<Vec<Value>, AppError>;
}
