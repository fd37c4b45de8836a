// src/db/keys.rs
//
// Único dueño del esquema de claves del almacén. Todas las claves de
// recursos siguen el patrón `tipo:tenantId:sufijo`, lo que permite listar
// por tenant con un escaneo de prefijo y comprobar la propiedad de una
// clave mirando solo la propia cadena.

use chrono::Utc;
use uuid::Uuid;

/// Milisegundos de época, usados como sufijo de creación de los recursos.
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Perfil del tenant: una sola clave por usuario.
pub fn profile(tenant_id: Uuid) -> String {
    format!("user:{tenant_id}")
}

pub fn client(tenant_id: Uuid, millis: i64) -> String {
    format!("client:{tenant_id}:{millis}")
}

pub fn client_prefix(tenant_id: Uuid) -> String {
    format!("client:{tenant_id}:")
}

pub fn invoice(tenant_id: Uuid, millis: i64) -> String {
    format!("invoice:{tenant_id}:{millis}")
}

pub fn invoice_prefix(tenant_id: Uuid) -> String {
    format!("invoice:{tenant_id}:")
}

/// Documento derivado de una factura: reutiliza el sufijo de creación de
/// la factura, así la reconciliación puede reescribirlo de forma
/// idempotente.
pub fn document_for(tenant_id: Uuid, suffix: &str) -> String {
    format!("document:{tenant_id}:{suffix}")
}

pub fn document_prefix(tenant_id: Uuid) -> String {
    format!("document:{tenant_id}:")
}

/// Turno de chat: registro de auditoría de solo escritura.
pub fn chat_turn(tenant_id: Uuid, millis: i64) -> String {
    format!("chat:{tenant_id}:{millis}")
}

/// Cuenta del proveedor de identidad local, indexada por email normalizado.
pub fn account(email: &str) -> String {
    format!("auth:{}", email.trim().to_lowercase())
}

/// Sufijo de creación de una clave de recurso (la parte tras el último `:`).
pub fn suffix(key: &str) -> &str {
    key.rsplit(':').next().unwrap_or(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn las_claves_de_recursos_caen_bajo_el_prefijo_de_su_tenant() {
        let tenant = Uuid::new_v4();
        assert!(client(tenant, 1700000000000).starts_with(&client_prefix(tenant)));
        assert!(invoice(tenant, 1700000000000).starts_with(&invoice_prefix(tenant)));
        assert!(document_for(tenant, "1700000000000").starts_with(&document_prefix(tenant)));
    }

    #[test]
    fn el_prefijo_de_un_tenant_no_captura_claves_de_otro() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        assert!(!document_for(b, "1700000000000").starts_with(&document_prefix(a)));
    }

    #[test]
    fn la_cuenta_normaliza_el_email() {
        assert_eq!(account("  Ana@Example.com "), "auth:ana@example.com");
    }

    #[test]
    fn el_sufijo_es_la_parte_final_de_la_clave() {
        let tenant = Uuid::new_v4();
        assert_eq!(suffix(&invoice(tenant, 42)), "42");
    }
}
