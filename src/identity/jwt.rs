// src/identity/jwt.rs

use std::sync::Arc;

use async_trait::async_trait;
use bcrypt::{hash, verify};
use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{keys, KeyValueStore},
    identity::provider::{Identity, IdentityProvider, Session},
};

/// Estructura de datos ("claims") dentro del JWT
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: Uuid,     // ID del tenant
    email: String, // Email de la cuenta
    exp: usize,    // Cuándo caduca el token
    iat: usize,    // Cuándo se emitió
}

/// Registro de cuenta que el proveedor guarda bajo su propio prefijo
/// `auth:{email}`. El hash de la contraseña nunca sale serializado hacia
/// ningún handler.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Account {
    id: Uuid,
    email: String,
    password_hash: String,
    created_at: DateTime<Utc>,
}

/// Proveedor de identidad local: contraseñas con bcrypt y tokens HS256.
#[derive(Clone)]
pub struct JwtIdentityProvider {
    store: Arc<dyn KeyValueStore>,
    jwt_secret: String,
}

impl JwtIdentityProvider {
    pub fn new(store: Arc<dyn KeyValueStore>, jwt_secret: String) -> Self {
        Self { store, jwt_secret }
    }

    async fn find_account(&self, email: &str) -> Result<Option<Account>, AppError> {
        match self.store.get(&keys::account(email)).await? {
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
            None => Ok(None),
        }
    }

    fn create_token(&self, identity: &Identity) -> Result<String, AppError> {
        let now = Utc::now();
        let expires_at = now + chrono::Duration::days(7);

        let claims = Claims {
            sub: identity.id,
            email: identity.email.clone(),
            exp: expires_at.timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        Ok(encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_ref()),
        )?)
    }
}

#[async_trait]
impl IdentityProvider for JwtIdentityProvider {
    async fn create_account(&self, email: &str, password: &str) -> Result<Identity, AppError> {
        if self.find_account(email).await?.is_some() {
            return Err(AppError::EmailAlreadyExists);
        }

        // El hashing es costoso en CPU: fuera del executor asíncrono.
        let password_clone = password.to_owned();
        let password_hash =
            tokio::task::spawn_blocking(move || hash(&password_clone, bcrypt::DEFAULT_COST))
                .await
                .map_err(|e| anyhow::anyhow!("Fallo en la tarea de hashing: {}", e))??;

        let account = Account {
            id: Uuid::new_v4(),
            email: email.trim().to_lowercase(),
            password_hash,
            created_at: Utc::now(),
        };

        let identity = Identity {
            id: account.id,
            email: account.email.clone(),
        };

        self.store
            .set(&keys::account(email), serde_json::to_value(&account)?)
            .await?;

        Ok(identity)
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AppError> {
        let account = self
            .find_account(email)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        let password_clone = password.to_owned();
        let password_hash_clone = account.password_hash.clone();

        // Igual que el hashing: la verificación va a un hilo bloqueante.
        let is_password_valid =
            tokio::task::spawn_blocking(move || verify(&password_clone, &password_hash_clone))
                .await
                .map_err(|e| anyhow::anyhow!("Fallo en la tarea de verificación: {}", e))??;

        if !is_password_valid {
            return Err(AppError::InvalidCredentials);
        }

        let identity = Identity {
            id: account.id,
            email: account.email,
        };
        let access_token = self.create_token(&identity)?;

        Ok(Session {
            identity,
            access_token,
        })
    }

    async fn verify(&self, token: &str) -> Result<Identity, AppError> {
        let validation = Validation::default();
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.jwt_secret.as_ref()),
            &validation,
        )
        .map_err(|_| AppError::InvalidToken)?;

        // La cuenta debe seguir existiendo y ser la misma que firmó el token.
        let account = self
            .find_account(&token_data.claims.email)
            .await?
            .ok_or(AppError::InvalidToken)?;

        if account.id != token_data.claims.sub {
            return Err(AppError::InvalidToken);
        }

        Ok(Identity {
            id: account.id,
            email: account.email,
        })
    }
}
