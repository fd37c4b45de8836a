// tests/services.rs
//
// Tests de los servicios contra el almacén en memoria, sin levantar el
// servidor HTTP: la misma composición que monta main.rs, inyectada a mano.

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

use fiscalia_backend::common::error::AppError;
use fiscalia_backend::db::{KeyValueStore, MemoryStore};
use fiscalia_backend::identity::{IdentityProvider, JwtIdentityProvider};
use fiscalia_backend::models::auth::RegisterUserPayload;
use fiscalia_backend::services::auth::AuthService;
use fiscalia_backend::services::chat::ChatService;
use fiscalia_backend::services::resources::ResourceService;

fn store() -> Arc<MemoryStore> {
    Arc::new(MemoryStore::new())
}

fn resources(store: &Arc<MemoryStore>) -> ResourceService {
    ResourceService::new(store.clone())
}

fn auth(store: &Arc<MemoryStore>) -> AuthService {
    let identity: Arc<dyn IdentityProvider> = Arc::new(JwtIdentityProvider::new(
        store.clone(),
        "secreto-de-test".to_string(),
    ));
    AuthService::new(store.clone(), identity)
}

fn register_payload(email: &str) -> RegisterUserPayload {
    serde_json::from_value(serde_json::json!({
        "name": "Ana",
        "lastName": "García",
        "email": email,
        "password": "contraseña",
        "userType": "autonomo",
    }))
    .unwrap()
}

fn a_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 4, 25).unwrap()
}

#[tokio::test]
async fn un_tenant_no_ve_los_clientes_de_otro() {
    let store = store();
    let service = resources(&store);
    let tenant_a = Uuid::new_v4();
    let tenant_b = Uuid::new_v4();

    service
        .create_client(tenant_a, "Acme SL", "B11111111", None)
        .await
        .unwrap();

    let a_list = service.list_clients(tenant_a).await.unwrap();
    let b_list = service.list_clients(tenant_b).await.unwrap();
    assert_eq!(a_list.len(), 1);
    assert!(b_list.is_empty());
}

#[tokio::test]
async fn listar_clientes_es_idempotente_y_ordenado() {
    let store = store();
    let service = resources(&store);
    let tenant = Uuid::new_v4();

    for name in ["Uno", "Dos", "Tres"] {
        service
            .create_client(tenant, name, "B22222222", None)
            .await
            .unwrap();
        // Sufijos de creación distintos entre clientes.
        tokio::time::sleep(Duration::from_millis(2)).await;
    }

    let first = service.list_clients(tenant).await.unwrap();
    let second = service.list_clients(tenant).await.unwrap();
    assert_eq!(first.len(), 3);
    let ids: Vec<_> = first.iter().map(|c| c.id.clone()).collect();
    let ids_again: Vec<_> = second.iter().map(|c| c.id.clone()).collect();
    assert_eq!(ids, ids_again);

    let mut sorted = ids.clone();
    sorted.sort();
    assert_eq!(ids, sorted);
}

#[tokio::test]
async fn crear_factura_recalcula_totales_y_crea_su_documento() {
    let store = store();
    let service = resources(&store);
    let tenant = Uuid::new_v4();

    let invoice = service
        .create_invoice(
            tenant,
            "client:x:1".to_string(),
            "Desarrollo web".to_string(),
            Decimal::from(100),
            Decimal::from(2),
            Decimal::from(21),
            Decimal::from(15),
            a_date(),
        )
        .await
        .unwrap();

    assert_eq!(invoice.subtotal, Decimal::from(200));
    assert_eq!(invoice.iva, Decimal::from(42));
    assert_eq!(invoice.irpf, Decimal::from(30));
    assert_eq!(invoice.total, Decimal::from(212));

    let documents = service.list_documents(tenant).await.unwrap();
    assert_eq!(documents.len(), 1);
    assert_eq!(documents[0].name, "Factura - Desarrollo web");
    assert_eq!(documents[0].invoice_id.as_deref(), Some(invoice.id.as_str()));
}

#[tokio::test]
async fn borrar_un_documento_ajeno_devuelve_forbidden_aunque_no_exista() {
    let store = store();
    let service = resources(&store);
    let tenant_a = Uuid::new_v4();
    let tenant_b = Uuid::new_v4();

    // Clave bien formada de otro tenant: 403 exista o no el registro.
    let foreign_key = format!("document:{tenant_a}:1714000000000");
    let err = service
        .delete_document(tenant_b, &foreign_key)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Forbidden));

    // Una clave propia inexistente se borra sin error (ausencia != fallo).
    let own_key = format!("document:{tenant_b}:1714000000000");
    service.delete_document(tenant_b, &own_key).await.unwrap();
}

#[tokio::test]
async fn el_documento_de_una_factura_se_puede_borrar_sin_tocar_la_factura() {
    let store = store();
    let service = resources(&store);
    let tenant = Uuid::new_v4();

    let invoice = service
        .create_invoice(
            tenant,
            String::new(),
            "Consultoría".to_string(),
            Decimal::from(500),
            Decimal::ONE,
            Decimal::from(21),
            Decimal::ZERO,
            a_date(),
        )
        .await
        .unwrap();

    let documents = service.list_documents(tenant).await.unwrap();
    service
        .delete_document(tenant, &documents[0].id)
        .await
        .unwrap();

    assert!(service.list_documents(tenant).await.unwrap().is_empty());
    // La factura sigue en el almacén.
    assert!(store.get(&invoice.id).await.unwrap().is_some());
}

#[tokio::test]
async fn la_reconciliacion_rederiva_documentos_que_faltan_y_es_idempotente() {
    let store = store();
    let service = resources(&store);
    let tenant = Uuid::new_v4();

    let invoice = service
        .create_invoice(
            tenant,
            String::new(),
            "Diseño".to_string(),
            Decimal::from(300),
            Decimal::ONE,
            Decimal::from(21),
            Decimal::from(15),
            a_date(),
        )
        .await
        .unwrap();

    // Simula la mitad perdida de la doble escritura.
    let documents = service.list_documents(tenant).await.unwrap();
    service
        .delete_document(tenant, &documents[0].id)
        .await
        .unwrap();

    let created = service.reconcile_documents(tenant).await.unwrap();
    assert_eq!(created.len(), 1);
    assert_eq!(created[0].invoice_id.as_deref(), Some(invoice.id.as_str()));

    // Segunda pasada: nada que reparar.
    let created_again = service.reconcile_documents(tenant).await.unwrap();
    assert!(created_again.is_empty());
    assert_eq!(service.list_documents(tenant).await.unwrap().len(), 1);
}

#[tokio::test]
async fn actualizar_perfil_fusiona_campos_y_sella_updated_at() {
    let store = store();
    let service = resources(&store);
    let tenant = Uuid::new_v4();

    // Sin perfil previo: se parte del objeto vacío.
    let first = service
        .update_profile(tenant, serde_json::json!({ "name": "Ana" }))
        .await
        .unwrap();
    assert_eq!(first["name"], "Ana");
    assert!(first["updatedAt"].is_string());

    let second = service
        .update_profile(tenant, serde_json::json!({ "userType": "autonomo" }))
        .await
        .unwrap();
    // El campo anterior sobrevive a la fusión.
    assert_eq!(second["name"], "Ana");
    assert_eq!(second["userType"], "autonomo");
}

#[tokio::test]
async fn el_registro_duplicado_falla_y_no_duplica_el_perfil() {
    let store = store();
    let auth = auth(&store);

    let user = auth.register(register_payload("ana@ejemplo.es")).await.unwrap();
    assert!(!user.access_token.is_empty());

    let err = auth
        .register(register_payload("ana@ejemplo.es"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::EmailAlreadyExists));

    let profiles = store.scan_by_prefix("user:").await.unwrap();
    assert_eq!(profiles.len(), 1);
}

#[tokio::test]
async fn el_login_enriquece_la_sesion_con_el_perfil_espejado() {
    let store = store();
    let auth = auth(&store);

    auth.register(register_payload("ana@ejemplo.es")).await.unwrap();

    let session = auth.login("ana@ejemplo.es", "contraseña").await.unwrap();
    assert_eq!(session.name, "Ana");
    assert_eq!(session.last_name, "García");
    assert_eq!(session.user_type, "autonomo");

    let err = auth.login("ana@ejemplo.es", "otra").await.unwrap_err();
    assert!(matches!(err, AppError::InvalidCredentials));
}

#[tokio::test]
async fn el_chat_registra_el_turno_y_responde_con_sus_fuentes() {
    let store = store();
    let chat = ChatService::new(store.clone());
    let tenant = Uuid::new_v4();

    let reply = chat.handle(tenant, "¿Qué es el IVA?", &[]).await.unwrap();
    assert!(reply.response.starts_with("El IVA"));
    assert_eq!(reply.sources.len(), 2);

    let turns = store
        .scan_by_prefix(&format!("chat:{tenant}:"))
        .await
        .unwrap();
    assert_eq!(turns.len(), 1);
    assert_eq!(turns[0]["message"], "¿Qué es el IVA?");
}
