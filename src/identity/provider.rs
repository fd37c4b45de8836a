// src/identity/provider.rs

use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

use crate::common::error::AppError;

/// Identidad verificada por el proveedor. El `id` es el identificador de
/// tenant con el que se espacian todas las claves del almacén.
#[derive(Debug, Clone, Serialize)]
pub struct Identity {
    pub id: Uuid,
    pub email: String,
}

/// Resultado de un inicio de sesión: la identidad más su credencial.
#[derive(Debug, Clone)]
pub struct Session {
    pub identity: Identity,
    pub access_token: String,
}

/// Frontera de inversión de dependencias con el proveedor de identidad.
///
/// El núcleo solo consume este contrato; cualquier backend conforme puede
/// sustituir a la implementación local de `identity::jwt`.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Da de alta una cuenta. Falla con `EmailAlreadyExists` si el email
    /// ya está registrado.
    async fn create_account(&self, email: &str, password: &str) -> Result<Identity, AppError>;

    /// Verifica las credenciales y emite un token de acceso.
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AppError>;

    /// Canjea un token de portador por la identidad que lo emitió.
    /// Falla con `InvalidToken` ante cualquier token no verificable.
    async fn verify(&self, token: &str) -> Result<Identity, AppError>;
}
