// src/services/chat.rs

use std::sync::Arc;

use chrono::Utc;
use serde_json::Value;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{keys, KeyValueStore},
    models::chat::{ChatResponse, ChatTurn},
};

/// Atribución constante de todas las respuestas del asistente.
pub const SOURCES: [&str; 2] = [
    "Base de conocimientos Fiscal IA",
    "Normativa fiscal española",
];

// Una entrada de la tabla de respuestas enlatadas: disparadores por
// palabra clave y su respuesta fija.
struct CannedAnswer {
    triggers: &'static [&'static str],
    response: &'static str,
}

// Tabla inmutable, evaluada en orden de prioridad sobre el mensaje en
// minúsculas. El primer disparador que aparezca en el mensaje decide.
const ANSWERS: &[CannedAnswer] = &[
    CannedAnswer {
        triggers: &["irpf"],
        response: "El IRPF (Impuesto sobre la Renta de las Personas Físicas) es un impuesto directo y progresivo que grava la renta obtenida en un año natural por las personas físicas residentes en España. Para autónomos, normalmente se aplica una retención del 15% (7% el primer año de alta). ¿Necesitas ayuda con algún cálculo específico?",
    },
    CannedAnswer {
        triggers: &["iva"],
        response: "El IVA (Impuesto sobre el Valor Añadido) es un impuesto indirecto que grava el consumo. En España existen tres tipos: General (21%), Reducido (10%) y Superreducido (4%). Los autónomos deben presentar el modelo 303 trimestralmente para declarar el IVA. ¿Quieres que te ayude a rellenar el modelo 303?",
    },
    CannedAnswer {
        triggers: &["303"],
        response: "El Modelo 303 es la declaración trimestral de IVA. Debes presentarlo antes del día 20 del mes siguiente al final del trimestre. En este modelo declaras el IVA repercutido (cobrado) y el IVA soportado (pagado). Puedo ayudarte a completarlo en la sección de Modelos Fiscales. ¿Quieres ir allí?",
    },
    CannedAnswer {
        triggers: &["130"],
        response: "El Modelo 130 es el pago fraccionado del IRPF para autónomos en estimación directa. Se presenta trimestralmente (días 1-20 de abril, julio, octubre y enero). Declaras tus ingresos menos gastos, y pagas el 20% del rendimiento neto. Puedo guiarte paso a paso en la sección de Modelos Fiscales.",
    },
    CannedAnswer {
        triggers: &["factura"],
        response: "Para crear una factura como autónomo, necesitas incluir: tus datos fiscales (nombre, NIF, dirección), datos del cliente, número de factura, fecha, concepto, base imponible, IVA (normalmente 21%) y retención de IRPF si aplica. Puedo ayudarte a generar una factura automáticamente en la sección de Facturas. ¿Quieres probar?",
    },
    CannedAnswer {
        triggers: &["autónomo", "autonomo"],
        response: "Un autónomo o trabajador por cuenta propia es una persona física que realiza una actividad económica de forma habitual, personal y directa. Debe estar dado de alta en el RETA (Régimen Especial de Trabajadores Autónomos) y pagar una cuota mensual. También debe declarar trimestralmente el IVA (modelo 303) y el IRPF (modelo 130). ¿Necesitas ayuda con algún trámite específico?",
    },
    CannedAnswer {
        triggers: &["hola", "ayuda"],
        response: "Hola! Estoy aquí para ayudarte con tus dudas sobre finanzas, impuestos y facturación. Puedo explicarte conceptos fiscales, ayudarte a rellenar modelos (303, 130), crear facturas, y responder preguntas sobre IVA, IRPF, y gestión financiera. ¿En qué puedo ayudarte?",
    },
];

/// Selecciona la respuesta enlatada para un mensaje. Nunca falla: si
/// ninguna palabra clave encaja, devuelve el texto genérico con el mensaje
/// original citado. `history` se acepta pero no se consulta todavía.
pub fn respond(message: &str, _history: &[Value]) -> ChatResponse {
    let lower_message = message.to_lowercase();

    let response = ANSWERS
        .iter()
        .find(|answer| {
            answer
                .triggers
                .iter()
                .any(|trigger| lower_message.contains(trigger))
        })
        .map(|answer| answer.response.to_string())
        .unwrap_or_else(|| {
            format!(
                "Entiendo que tienes una consulta sobre \"{message}\". Como asistente fiscal, \
                 puedo ayudarte con información sobre IRPF, IVA, facturas, modelos 303 y 130, \
                 conceptos fiscales básicos, y gestión financiera para autónomos. ¿Podrías ser \
                 más específico sobre qué información necesitas? Por ejemplo: \"¿Qué es el \
                 IRPF?\", \"¿Cómo relleno el modelo 303?\", \"¿Cómo crear una factura?\""
            )
        });

    ChatResponse {
        response,
        sources: SOURCES.iter().map(|s| s.to_string()).collect(),
    }
}

/// Orquestación del chat: deja rastro del turno en el almacén y delega la
/// respuesta en la tabla de reglas.
#[derive(Clone)]
pub struct ChatService {
    store: Arc<dyn KeyValueStore>,
}

impl ChatService {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        tenant_id: Uuid,
        message: &str,
        history: &[Value],
    ) -> Result<ChatResponse, AppError> {
        let turn = ChatTurn {
            user_id: tenant_id,
            message: message.to_owned(),
            timestamp: Utc::now(),
        };

        self.store
            .set(
                &keys::chat_turn(tenant_id, keys::now_millis()),
                serde_json::to_value(&turn)?,
            )
            .await?;

        Ok(respond(message, history))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn la_pregunta_sobre_irpf_activa_su_disparador() {
        let reply = respond("¿Qué es el IRPF?", &[]);
        assert!(reply.response.starts_with("El IRPF"));
        assert_eq!(reply.sources, SOURCES.to_vec());
    }

    #[test]
    fn el_disparador_ignora_mayusculas() {
        let reply = respond("HOLA", &[]);
        assert!(reply.response.starts_with("Hola!"));
    }

    #[test]
    fn irpf_tiene_prioridad_sobre_iva() {
        // "irpf" va antes en la tabla aunque el mensaje mencione ambos.
        let reply = respond("dudas de irpf e iva", &[]);
        assert!(reply.response.starts_with("El IRPF"));
    }

    #[test]
    fn el_acento_de_autonomo_no_importa() {
        assert_eq!(
            respond("soy autónomo", &[]).response,
            respond("soy autonomo", &[]).response
        );
    }

    #[test]
    fn sin_disparador_se_devuelve_el_texto_generico_con_eco() {
        let reply = respond("xyz123", &[]);
        assert!(reply.response.contains("\"xyz123\""));
        assert!(reply.response.contains("modelos 303 y 130"));
        assert_eq!(reply.sources.len(), 2);
    }
}
