// src/services/resources.rs

use std::collections::HashSet;
use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{keys, KeyValueStore},
    models::{
        clients::Client,
        documents::{Document, DocumentStatus, DocumentType},
        invoices::Invoice,
    },
    services::taxes,
};

// Tamaño nominal que el centro de documentos muestra para una factura
// generada; no hay fichero real detrás de la entrada.
const INVOICE_DOCUMENT_SIZE: &str = "45 KB";

fn decode_list<T: DeserializeOwned>(values: Vec<Value>) -> Result<Vec<T>, AppError> {
    values
        .into_iter()
        .map(|value| serde_json::from_value(value).map_err(AppError::from))
        .collect()
}

/// Servicio de recursos por tenant: clientes, facturas, documentos y
/// perfil. Cada operación trabaja únicamente bajo el prefijo del tenant
/// autenticado; la propiedad se comprueba sobre la propia clave.
#[derive(Clone)]
pub struct ResourceService {
    store: Arc<dyn KeyValueStore>,
}

impl ResourceService {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    // =========================================================================
    //  CLIENTES
    // =========================================================================

    /// Lista los clientes del tenant. Sin clientes hay lista vacía, nunca
    /// un error.
    pub async fn list_clients(&self, tenant_id: Uuid) -> Result<Vec<Client>, AppError> {
        let records = self
            .store
            .scan_by_prefix(&keys::client_prefix(tenant_id))
            .await?;
        decode_list(records)
    }

    pub async fn create_client(
        &self,
        tenant_id: Uuid,
        name: &str,
        nif: &str,
        address: Option<String>,
    ) -> Result<Client, AppError> {
        let client = Client {
            id: keys::client(tenant_id, keys::now_millis()),
            name: name.to_owned(),
            nif: nif.to_owned(),
            address: address.unwrap_or_default(),
            created_at: Utc::now(),
        };

        self.store
            .set(&client.id, serde_json::to_value(&client)?)
            .await?;

        Ok(client)
    }

    // =========================================================================
    //  FACTURAS
    // =========================================================================

    /// Crea una factura y su entrada de documento asociada.
    ///
    /// Los totales se recalculan siempre con el motor fiscal a partir de
    /// los datos crudos; los totales que envíe el cliente se ignoran.
    ///
    /// Son DOS escrituras sin transacción: si el proceso cae entre ambas
    /// queda una factura huérfana sin documento. Es una ventana de
    /// inconsistencia aceptada que `reconcile_documents` repara después.
    #[allow(clippy::too_many_arguments)]
    pub async fn create_invoice(
        &self,
        tenant_id: Uuid,
        client_id: String,
        concept: String,
        unit_price: Decimal,
        quantity: Decimal,
        iva_percentage: Decimal,
        irpf_percentage: Decimal,
        date: NaiveDate,
    ) -> Result<Invoice, AppError> {
        let totals = taxes::invoice_totals(unit_price, quantity, iva_percentage, irpf_percentage);

        let invoice = Invoice {
            id: keys::invoice(tenant_id, keys::now_millis()),
            user_id: tenant_id,
            client_id,
            concept,
            unit_price,
            quantity,
            iva_percentage,
            irpf_percentage,
            subtotal: totals.subtotal,
            iva: totals.iva,
            irpf: totals.irpf,
            total: totals.total,
            date,
            created_at: Utc::now(),
        };

        self.store
            .set(&invoice.id, serde_json::to_value(&invoice)?)
            .await?;

        // Segunda escritura: la entrada del centro de documentos.
        let document = document_for_invoice(tenant_id, &invoice);
        self.store
            .set(&document.id, serde_json::to_value(&document)?)
            .await?;

        Ok(invoice)
    }

    // =========================================================================
    //  DOCUMENTOS
    // =========================================================================

    pub async fn list_documents(&self, tenant_id: Uuid) -> Result<Vec<Document>, AppError> {
        let records = self
            .store
            .scan_by_prefix(&keys::document_prefix(tenant_id))
            .await?;
        decode_list(records)
    }

    /// Borra un documento del tenant.
    ///
    /// La comprobación de propiedad es sobre la cadena de la clave, exista
    /// o no el registro: una clave ajena responde 403, nunca 404, para no
    /// revelar si el recurso de otro tenant existe.
    pub async fn delete_document(
        &self,
        tenant_id: Uuid,
        document_id: &str,
    ) -> Result<(), AppError> {
        if !document_id.starts_with(&keys::document_prefix(tenant_id)) {
            return Err(AppError::Forbidden);
        }

        self.store.delete(document_id).await
    }

    /// Pasada de reconciliación idempotente: vuelve a derivar las entradas
    /// de documento que falten para las facturas del tenant (la otra mitad
    /// de la doble escritura de `create_invoice`). Devuelve las creadas.
    pub async fn reconcile_documents(&self, tenant_id: Uuid) -> Result<Vec<Document>, AppError> {
        let invoices: Vec<Invoice> = decode_list(
            self.store
                .scan_by_prefix(&keys::invoice_prefix(tenant_id))
                .await?,
        )?;
        let documents = self.list_documents(tenant_id).await?;

        let referenced: HashSet<&str> = documents
            .iter()
            .filter_map(|doc| doc.invoice_id.as_deref())
            .collect();

        let mut created = Vec::new();
        for invoice in invoices {
            if referenced.contains(invoice.id.as_str()) {
                continue;
            }

            let document = document_for_invoice(tenant_id, &invoice);
            self.store
                .set(&document.id, serde_json::to_value(&document)?)
                .await?;
            created.push(document);
        }

        Ok(created)
    }

    // =========================================================================
    //  PERFIL
    // =========================================================================

    /// Fusiona los campos recibidos sobre el perfil guardado (un perfil
    /// ausente se trata como objeto vacío), sella `updatedAt` y persiste.
    /// Este núcleo no valida campo a campo: la validación de
    /// identificadores fiscales es cosa de la UI.
    pub async fn update_profile(
        &self,
        tenant_id: Uuid,
        partial_fields: Value,
    ) -> Result<Value, AppError> {
        let key = keys::profile(tenant_id);

        let mut profile = match self.store.get(&key).await? {
            Some(Value::Object(map)) => map,
            _ => Map::new(),
        };

        if let Value::Object(fields) = partial_fields {
            for (field, value) in fields {
                profile.insert(field, value);
            }
        }
        profile.insert(
            "updatedAt".to_string(),
            Value::String(Utc::now().to_rfc3339()),
        );

        let merged = Value::Object(profile);
        self.store.set(&key, merged.clone()).await?;

        Ok(merged)
    }
}

// Entrada de documento derivada de una factura. La clave reutiliza el
// sufijo de creación de la factura, de modo que reescribirla es inocuo.
fn document_for_invoice(tenant_id: Uuid, invoice: &Invoice) -> Document {
    Document {
        id: keys::document_for(tenant_id, keys::suffix(&invoice.id)),
        name: format!("Factura - {}", invoice.concept),
        kind: DocumentType::Invoice,
        date: invoice.date,
        size: INVOICE_DOCUMENT_SIZE.to_string(),
        status: DocumentStatus::Completed,
        invoice_id: Some(invoice.id.clone()),
    }
}
