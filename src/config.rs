// src/config.rs

use std::{env, sync::Arc};

use anyhow::Context;

use crate::{
    db::KeyValueStore,
    identity::{IdentityProvider, JwtIdentityProvider},
    services::{auth::AuthService, chat::ChatService, resources::ResourceService},
};

// El estado compartido, accesible en toda la aplicación.
//
// Recibe el almacén clave-valor ya construido: es la frontera de
// inversión de dependencias, cualquier backend conforme sirve.
#[derive(Clone)]
pub struct AppState {
    pub identity: Arc<dyn IdentityProvider>,
    pub auth: AuthService,
    pub resources: ResourceService,
    pub chat: ChatService,
}

impl AppState {
    pub fn new(store: Arc<dyn KeyValueStore>) -> anyhow::Result<Self> {
        // .env es opcional; en despliegue las variables llegan del entorno.
        dotenvy::dotenv().ok();

        let jwt_secret =
            env::var("JWT_SECRET").context("JWT_SECRET debe estar definida")?;

        let identity: Arc<dyn IdentityProvider> =
            Arc::new(JwtIdentityProvider::new(store.clone(), jwt_secret));

        Ok(Self {
            auth: AuthService::new(store.clone(), identity.clone()),
            resources: ResourceService::new(store.clone()),
            chat: ChatService::new(store),
            identity,
        })
    }
}

/// Dirección de escucha del servidor, configurable por entorno.
pub fn bind_addr() -> String {
    env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string())
}
