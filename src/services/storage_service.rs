//! Cliente del object storage
//!
//! Sube ficheros binarios al bucket configurado vía su API REST y resuelve
//! la URL pública del objeto. La clave del objeto se deriva del timestamp
//! actual más la extensión original del fichero.

use reqwest::Client;
use tracing::{error, info};

use crate::config::environment::EnvironmentConfig;
use crate::utils::errors::{AppError, AppResult};

#[derive(Clone)]
pub struct StorageClient {
    http_client: Client,
    base_url: String,
    bucket: String,
    api_key: Option<String>,
}

/// Derivar la clave del objeto: timestamp en milisegundos + extensión original
pub fn make_object_key(original_filename: &str, now_millis: i64) -> String {
    match original_filename.rsplit_once('.') {
        Some((_, ext)) if !ext.is_empty() => format!("{}.{}", now_millis, ext.to_lowercase()),
        _ => now_millis.to_string(),
    }
}

impl StorageClient {
    pub fn new(config: &EnvironmentConfig) -> Self {
        Self {
            http_client: Client::new(),
            base_url: config.storage_url.trim_end_matches('/').to_string(),
            bucket: config.storage_bucket.clone(),
            api_key: config.storage_api_key.clone(),
        }
    }

    /// Subir un objeto al bucket
    pub async fn upload(&self, key: &str, bytes: Vec<u8>, content_type: &str) -> AppResult<()> {
        let url = format!("{}/object/{}/{}", self.base_url, self.bucket, key);

        let mut request = self
            .http_client
            .post(&url)
            .header("Content-Type", content_type)
            .body(bytes);

        if let Some(api_key) = &self.api_key {
            request = request.bearer_auth(api_key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AppError::Storage(format!("Error subiendo objeto '{}': {}", key, e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!("❌ Storage respondió {} para '{}': {}", status, key, body);
            return Err(AppError::Storage(format!(
                "Storage respondió {} al subir '{}'",
                status, key
            )));
        }

        info!("📤 Objeto subido: {}/{}", self.bucket, key);
        Ok(())
    }

    /// URL pública de un objeto del bucket
    pub fn public_url(&self, key: &str) -> String {
        format!("{}/object/public/{}/{}", self.base_url, self.bucket, key)
    }

    /// Eliminar objetos del bucket
    pub async fn remove(&self, keys: &[String]) -> AppResult<()> {
        let url = format!("{}/object/{}", self.base_url, self.bucket);

        let mut request = self
            .http_client
            .delete(&url)
            .json(&serde_json::json!({ "prefixes": keys }));

        if let Some(api_key) = &self.api_key {
            request = request.bearer_auth(api_key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AppError::Storage(format!("Error eliminando objetos: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::Storage(format!(
                "Storage respondió {} al eliminar objetos",
                response.status()
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_make_object_key_with_extension() {
        assert_eq!(make_object_key("dni-frontal.PDF", 1704067200000), "1704067200000.pdf");
        assert_eq!(make_object_key("foto.jpeg", 42), "42.jpeg");
    }

    #[test]
    fn test_make_object_key_without_extension() {
        assert_eq!(make_object_key("README", 42), "42");
        assert_eq!(make_object_key("archivo.", 42), "42");
    }
}
