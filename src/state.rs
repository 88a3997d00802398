//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum.

use std::sync::Arc;

use sqlx::PgPool;

use crate::cache::redis_client::RedisClient;
use crate::cache::ResourceCache;
use crate::config::environment::EnvironmentConfig;
use crate::services::storage_service::StorageClient;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: EnvironmentConfig,
    pub cache: ResourceCache,
    pub storage: StorageClient,
}

impl AppState {
    pub fn new(pool: PgPool, config: EnvironmentConfig, redis: RedisClient) -> Self {
        let ttl = redis.default_ttl();
        let cache = ResourceCache::new(Arc::new(redis), ttl);
        let storage = StorageClient::new(&config);
        Self {
            pool,
            config,
            cache,
            storage,
        }
    }
}
