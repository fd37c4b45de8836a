// src/db/memory.rs

use std::collections::BTreeMap;
use std::ops::Bound;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use crate::common::error::AppError;
use crate::db::kv::KeyValueStore;

/// Implementación de referencia del almacén, en memoria.
///
/// El `BTreeMap` mantiene las claves ordenadas, así que un escaneo de
/// prefijo devuelve siempre los registros en el mismo orden (por sufijo de
/// creación). En despliegue real se inyecta un backend externo conforme al
/// mismo contrato; este sirve para desarrollo y para los tests.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<BTreeMap<String, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<Value>, AppError> {
        let guard = self.inner.read().await;
        Ok(guard.get(key).cloned())
    }

    async fn set(&self, key: &str, value: Value) -> Result<(), AppError> {
        let mut guard = self.inner.write().await;
        guard.insert(key.to_owned(), value);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), AppError> {
        let mut guard = self.inner.write().await;
        guard.remove(key);
        Ok(())
    }

    async fn scan_by_prefix(&self, prefix: &str) -> Result<Vec<Value>, AppError> {
        let guard = self.inner.read().await;
        let records = guard
            .range::<str, _>((Bound::Included(prefix), Bound::Unbounded))
            .take_while(|(key, _)| key.starts_with(prefix))
            .map(|(_, value)| value.clone())
            .collect();
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn get_devuelve_none_para_clave_inexistente() {
        let store = MemoryStore::new();
        assert!(store.get("client:x:1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn set_y_get_conservan_el_registro() {
        let store = MemoryStore::new();
        store.set("client:x:1", json!({"name": "Acme"})).await.unwrap();
        let value = store.get("client:x:1").await.unwrap().unwrap();
        assert_eq!(value["name"], "Acme");
    }

    #[tokio::test]
    async fn el_escaneo_respeta_el_prefijo_y_el_orden() {
        let store = MemoryStore::new();
        store.set("client:a:2", json!({"n": 2})).await.unwrap();
        store.set("client:a:1", json!({"n": 1})).await.unwrap();
        store.set("client:b:1", json!({"n": 9})).await.unwrap();

        let records = store.scan_by_prefix("client:a:").await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["n"], 1);
        assert_eq!(records[1]["n"], 2);
    }

    #[tokio::test]
    async fn borrar_una_clave_inexistente_no_falla() {
        let store = MemoryStore::new();
        store.delete("document:x:1").await.unwrap();
    }
}
