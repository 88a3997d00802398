//! Cache
//!
//! Este módulo contiene el cliente Redis y el cache de recursos
//! que los workflows invalidan tras cada mutación.

pub mod cache_config;
pub mod redis_client;
pub mod resource_cache;

pub use cache_config::CacheConfig;
pub use resource_cache::ResourceCache;

use anyhow::Result;

/// Operaciones de cache sobre valores ya serializados.
///
/// El trait trabaja con strings JSON para poder usarse como trait object:
/// `ResourceCache` serializa y deserializa en su capa.
#[async_trait::async_trait]
pub trait CacheOperations: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>>;
    async fn set(&self, key: &str, value: String, ttl: u64) -> Result<()>;
    async fn delete(&self, key: &str) -> Result<()>;
    async fn exists(&self, key: &str) -> Result<bool>;
}
