// src/models/clients.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Cliente facturable de un tenant. El `id` embebe el tenant y el instante
/// de creación (`client:{tenantId}:{epochMillis}`), lo que garantiza la
/// unicidad y permite listar por prefijo. Inmutable tras su creación.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    #[schema(example = "client:550e8400-e29b-41d4-a716-446655440000:1714000000000")]
    pub id: String,

    #[schema(example = "Estudio Mendez SL")]
    pub name: String,

    #[schema(example = "B12345678")]
    pub nif: String,

    #[serde(default)]
    #[schema(example = "Calle Mayor 1, Madrid")]
    pub address: String,

    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ClientListResponse {
    pub clients: Vec<Client>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ClientResponse {
    pub client: Client,
}
