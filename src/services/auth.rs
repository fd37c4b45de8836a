// src/services/auth.rs

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{keys, KeyValueStore},
    identity::IdentityProvider,
    models::auth::{Profile, RegisterUserPayload, SessionUser},
};

/// Orquestación de registro y login.
///
/// Las cuentas viven en el proveedor de identidad; este servicio solo
/// espeja el perfil mínimo en el almacén tras el alta y lo vuelve a leer
/// en el login para enriquecer la sesión devuelta.
#[derive(Clone)]
pub struct AuthService {
    store: Arc<dyn KeyValueStore>,
    identity: Arc<dyn IdentityProvider>,
}

impl AuthService {
    pub fn new(store: Arc<dyn KeyValueStore>, identity: Arc<dyn IdentityProvider>) -> Self {
        Self { store, identity }
    }

    pub async fn register(&self, payload: RegisterUserPayload) -> Result<SessionUser, AppError> {
        // El proveedor rechaza el email duplicado antes de escribir nada,
        // así que nunca se duplica el perfil.
        let identity = self
            .identity
            .create_account(&payload.email, &payload.password)
            .await?;

        let profile = Profile {
            id: identity.id,
            email: identity.email.clone(),
            name: payload.name,
            last_name: payload.last_name,
            user_type: payload.user_type,
            created_at: Utc::now(),
            updated_at: None,
        };

        self.store
            .set(&keys::profile(identity.id), serde_json::to_value(&profile)?)
            .await?;

        // Inicia sesión para devolver el token junto al perfil.
        let session = self
            .identity
            .sign_in(&payload.email, &payload.password)
            .await?;

        Ok(SessionUser {
            id: identity.id,
            email: identity.email,
            name: profile.name,
            last_name: profile.last_name,
            user_type: profile.user_type,
            access_token: session.access_token,
        })
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<SessionUser, AppError> {
        let session = self.identity.sign_in(email, password).await?;

        // Perfil espejado en el almacén; si faltara algún campo se
        // devuelven valores por defecto en lugar de fallar el login.
        let profile = self.read_profile(session.identity.id).await?;

        Ok(SessionUser {
            id: session.identity.id,
            email: session.identity.email,
            name: profile
                .as_ref()
                .map(|p| p.name.clone())
                .unwrap_or_default(),
            last_name: profile
                .as_ref()
                .map(|p| p.last_name.clone())
                .unwrap_or_default(),
            user_type: profile
                .as_ref()
                .map(|p| p.user_type.clone())
                .unwrap_or_else(|| "particular".to_string()),
            access_token: session.access_token,
        })
    }

    async fn read_profile(&self, tenant_id: Uuid) -> Result<Option<Profile>, AppError> {
        match self.store.get(&keys::profile(tenant_id)).await? {
            Some(value) => Ok(serde_json::from_value(value).ok()),
            None => Ok(None),
        }
    }
}
