// src/main.rs

use std::sync::Arc;

use axum::{
    middleware as axum_middleware,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde_json::json;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use fiscalia_backend::{
    config::{self, AppState},
    db::MemoryStore,
    docs::ApiDoc,
    handlers,
    middleware::auth::auth_middleware,
};

#[tokio::main]
async fn main() {
    // Inicializa el logger; el nivel se controla con RUST_LOG.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .init();

    // El almacén de referencia en memoria; en despliegue real aquí se
    // inyecta el backend externo conforme a KeyValueStore.
    let store = Arc::new(MemoryStore::new());

    // .expect() está bien aquí: si la configuración falla, la aplicación
    // no debe arrancar.
    let app_state = AppState::new(store).expect("Fallo al inicializar el estado de la aplicación.");

    // Rutas de autenticación (públicas: son las que emiten la credencial)
    let auth_routes = Router::new()
        .route("/register", post(handlers::auth::register))
        .route("/login", post(handlers::auth::login));

    // Rutas de recursos, todas detrás de la puerta de identidad
    let api_routes = Router::new()
        .route("/chat", post(handlers::chat::chat))
        .route(
            "/clients",
            get(handlers::clients::list_clients).post(handlers::clients::create_client),
        )
        .route("/invoices", post(handlers::invoices::create_invoice))
        .route("/documents", get(handlers::documents::list_documents))
        .route(
            "/documents/reconcile",
            post(handlers::documents::reconcile_documents),
        )
        .route(
            "/documents/{id}",
            delete(handlers::documents::delete_document),
        )
        .route("/user/profile", put(handlers::auth::update_profile))
        .route("/taxes/model303", post(handlers::taxes::model_303))
        .route("/taxes/model130", post(handlers::taxes::model_130))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_middleware,
        ));

    // Combina todo en el router principal
    let app = Router::new()
        .route("/health", get(|| async { Json(json!({ "status": "ok" })) }))
        .nest("/auth", auth_routes)
        .merge(api_routes)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(app_state);

    // Arranca el servidor
    let addr = config::bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .expect("Fallo al iniciar el listener TCP");
    tracing::info!("🚀 Servidor escuchando en {}", listener.local_addr().unwrap());
    axum::serve(listener, app)
        .await
        .expect("Error en el servidor Axum");
}
