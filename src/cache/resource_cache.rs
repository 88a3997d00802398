//! Cache de recursos lógicos
//!
//! Los workflows de mutación invalidan aquí el listado cacheado del recurso
//! que acaban de tocar (`bookings`, `vehicles`, `customers`...). El cache es
//! un colaborador explícito del estado de la aplicación, no estado global:
//! el backend concreto se inyecta como trait object al construirlo.

use std::sync::Arc;

use anyhow::Result;
use serde::{de::DeserializeOwned, Serialize};

use super::CacheOperations;

/// Nombres de recursos lógicos usados como claves de cache
pub mod resources {
    pub const BOOKINGS: &str = "bookings";
    pub const VEHICLES: &str = "vehicles";
    pub const CUSTOMERS: &str = "customers";
    pub const CONTRACT_TEMPLATES: &str = "contract_templates";
    pub const DOCUMENTS: &str = "documents";
}

/// Cache keyed por nombre de recurso lógico
#[derive(Clone)]
pub struct ResourceCache {
    client: Arc<dyn CacheOperations>,
    ttl: u64,
}

impl ResourceCache {
    pub fn new(client: Arc<dyn CacheOperations>, ttl: u64) -> Self {
        Self { client, ttl }
    }

    fn key(&self, resource: &str) -> String {
        format!("car_rental:resource:{}", resource)
    }

    /// Leer el listado cacheado de un recurso
    pub async fn get_list<T: DeserializeOwned>(&self, resource: &str) -> Result<Option<Vec<T>>> {
        match self.client.get(&self.key(resource)).await? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Guardar el listado de un recurso
    pub async fn set_list<T: Serialize>(&self, resource: &str, values: &Vec<T>) -> Result<()> {
        let raw = serde_json::to_string(values)?;
        self.client.set(&self.key(resource), raw, self.ttl).await
    }

    /// Invalidar el recurso tras una mutación exitosa
    pub async fn invalidate(&self, resource: &str) {
        log::info!("♻️ Invalidando cache de recurso: '{}'", resource);
        // Una invalidación fallida solo deja el cache brevemente obsoleto
        if let Err(e) = self.client.delete(&self.key(resource)).await {
            log::warn!("⚠️ No se pudo invalidar '{}': {}", resource, e);
        }
    }
}
