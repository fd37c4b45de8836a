// src/docs.rs

use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use utoipa::OpenApi;

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Auth ---
        handlers::auth::register,
        handlers::auth::login,

        // --- Users ---
        handlers::auth::update_profile,

        // --- Chat ---
        handlers::chat::chat,

        // --- Clients ---
        handlers::clients::list_clients,
        handlers::clients::create_client,

        // --- Invoices ---
        handlers::invoices::create_invoice,

        // --- Documents ---
        handlers::documents::list_documents,
        handlers::documents::delete_document,
        handlers::documents::reconcile_documents,

        // --- Taxes ---
        handlers::taxes::model_303,
        handlers::taxes::model_130,
    ),
    components(
        schemas(
            // --- Auth ---
            models::auth::Profile,
            models::auth::RegisterUserPayload,
            models::auth::LoginUserPayload,
            models::auth::SessionUser,
            models::auth::AuthResponse,
            models::auth::ProfileResponse,

            // --- Chat ---
            models::chat::ChatTurn,
            models::chat::ChatPayload,
            models::chat::ChatResponse,

            // --- Clients ---
            models::clients::Client,
            models::clients::ClientListResponse,
            models::clients::ClientResponse,
            handlers::clients::CreateClientPayload,

            // --- Invoices ---
            models::invoices::Invoice,
            models::invoices::InvoiceResponse,
            handlers::invoices::CreateInvoicePayload,

            // --- Documents ---
            models::documents::DocumentType,
            models::documents::DocumentStatus,
            models::documents::Document,
            models::documents::DocumentListResponse,
            models::documents::DeleteResponse,

            // --- Taxes ---
            models::taxes::InvoiceTotals,
            models::taxes::Model303Payload,
            models::taxes::Model303Result,
            models::taxes::Model130Payload,
            models::taxes::Model130Result,
        )
    ),
    tags(
        (name = "Auth", description = "Registro y login"),
        (name = "Users", description = "Perfil del usuario"),
        (name = "Chat", description = "Asistente fiscal por reglas"),
        (name = "Clients", description = "Clientes facturables"),
        (name = "Invoices", description = "Emisión de facturas"),
        (name = "Documents", description = "Centro de documentos"),
        (name = "Taxes", description = "Modelos fiscales trimestrales")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "api_jwt",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}
