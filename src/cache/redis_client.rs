use anyhow::Result;
use redis::{aio::ConnectionManager, AsyncCommands, RedisResult};
use tracing::{debug, error, info, warn};

use super::{CacheConfig, CacheOperations};

/// Cliente Redis con connection pooling y operaciones async
#[derive(Clone)]
pub struct RedisClient {
    manager: ConnectionManager,
    config: CacheConfig,
}

impl RedisClient {
    /// Crear nuevo cliente Redis
    pub async fn new(config: CacheConfig) -> Result<Self> {
        info!("🔗 Conectando a Redis: {}", config.redis_url);

        let client = redis::Client::open(config.redis_url.clone())?;
        let manager = ConnectionManager::new(client).await?;

        // Test de conexión usando un comando simple
        let mut conn = manager.clone();
        let _: () = redis::cmd("PING").query_async(&mut conn).await?;

        info!("✅ Redis conectado exitosamente");

        Ok(Self { manager, config })
    }

    /// TTL por defecto configurado
    pub fn default_ttl(&self) -> u64 {
        self.config.default_ttl
    }

    /// Verificar si Redis está conectado
    pub async fn is_connected(&self) -> bool {
        let mut conn = self.manager.clone();
        match redis::cmd("PING").query_async::<_, String>(&mut conn).await {
            Ok(response) => response == "PONG",
            Err(_) => false,
        }
    }
}

#[async_trait::async_trait]
impl CacheOperations for RedisClient {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let mut conn = self.manager.clone();

        match conn.get::<_, Option<String>>(key).await {
            Ok(Some(value)) => {
                debug!("📥 Cache HIT para clave: {}", key);
                Ok(Some(value))
            }
            Ok(None) => {
                debug!("❌ Cache MISS para clave: {}", key);
                Ok(None)
            }
            Err(e) => {
                warn!("⚠️ Error leyendo cache para clave {}: {}", key, e);
                Ok(None)
            }
        }
    }

    async fn set(&self, key: &str, value: String, ttl: u64) -> Result<()> {
        let mut conn = self.manager.clone();

        let result: RedisResult<()> = conn.set_ex(key, value, ttl).await;

        match result {
            Ok(()) => {
                debug!("💾 Cache SET para clave: {} (TTL: {}s)", key, ttl);
                Ok(())
            }
            Err(e) => {
                error!("❌ Error guardando en cache para clave {}: {}", key, e);
                Err(anyhow::anyhow!("Error de Redis: {}", e))
            }
        }
    }

    async fn delete(&self, key: &str) -> Result<()> {
        let mut conn = self.manager.clone();

        let result: RedisResult<i64> = conn.del(key).await;

        match result {
            Ok(count) => {
                debug!("🗑️ Cache DELETE para clave: {} (eliminados: {})", key, count);
                Ok(())
            }
            Err(e) => {
                warn!("⚠️ Error eliminando cache para clave {}: {}", key, e);
                Ok(()) // No fallar si no se puede eliminar
            }
        }
    }

    async fn exists(&self, key: &str) -> Result<bool> {
        let mut conn = self.manager.clone();

        match conn.exists(key).await {
            Ok(exists) => {
                debug!("🔍 Cache EXISTS para clave {}: {}", key, exists);
                Ok(exists)
            }
            Err(e) => {
                warn!("⚠️ Error verificando existencia de clave {}: {}", key, e);
                Ok(false)
            }
        }
    }
}
