//! Subida de documentos de cliente
//!
//! El fichero se sube primero al object storage; si eso falla no se escribe
//! ningún registro. Si el registro falla después de una subida exitosa el
//! objeto queda huérfano en el bucket: se registra y no se revierte.

use chrono::Utc;
use sqlx::PgPool;
use tracing::warn;
use uuid::Uuid;

use crate::cache::resource_cache::{resources, ResourceCache};
use crate::dto::common::ApiResponse;
use crate::dto::document_dto::DocumentResponse;
use crate::repositories::customer_repository::CustomerRepository;
use crate::repositories::document_repository::DocumentRepository;
use crate::services::storage_service::{make_object_key, StorageClient};
use crate::utils::errors::{not_found_error, AppError, AppResult};

/// Fichero recibido por multipart, ya leído en memoria
#[derive(Debug)]
pub struct UploadedFile {
    pub original_filename: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

pub struct DocumentController {
    repository: DocumentRepository,
    customer_repository: CustomerRepository,
    storage: StorageClient,
    cache: ResourceCache,
}

impl DocumentController {
    pub fn new(pool: PgPool, storage: StorageClient, cache: ResourceCache) -> Self {
        Self {
            repository: DocumentRepository::new(pool.clone()),
            customer_repository: CustomerRepository::new(pool),
            storage,
            cache,
        }
    }

    pub async fn upload(
        &self,
        customer_id: Uuid,
        document_type: String,
        name: Option<String>,
        file: UploadedFile,
    ) -> AppResult<ApiResponse<DocumentResponse>> {
        self.customer_repository
            .find_by_id(customer_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Cliente no encontrado".to_string()))?;

        let key = make_object_key(&file.original_filename, Utc::now().timestamp_millis());
        let content_type = file
            .content_type
            .clone()
            .unwrap_or_else(|| "application/octet-stream".to_string());
        let file_size = file.bytes.len() as i64;

        // La subida va primero: si falla, no se escribe ningún registro
        self.storage.upload(&key, file.bytes, &content_type).await?;

        let file_url = self.storage.public_url(&key);
        let logical_name = name.unwrap_or(file.original_filename);

        let document = self
            .repository
            .create(
                customer_id,
                document_type,
                logical_name,
                file_url,
                Some(file_size),
                Some(content_type),
            )
            .await
            .map_err(|e| {
                // El objeto ya está en el bucket y no se revierte
                warn!("⚠️ Registro de documento falló tras subir '{}': objeto huérfano", key);
                e
            })?;

        self.cache.invalidate(resources::DOCUMENTS).await;

        Ok(ApiResponse::success_with_message(
            document.into(),
            "Documento subido exitosamente".to_string(),
        ))
    }

    pub async fn list_by_customer(&self, customer_id: Uuid) -> AppResult<Vec<DocumentResponse>> {
        let documents = self.repository.find_by_customer(customer_id).await?;
        Ok(documents.into_iter().map(Into::into).collect())
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let document = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Document", &id.to_string()))?;

        self.repository.delete(id).await?;
        self.cache.invalidate(resources::DOCUMENTS).await;

        // Borrado best-effort del objeto: si falla queda huérfano en el bucket
        if let Some(key) = document.file_url.rsplit('/').next() {
            if let Err(e) = self.storage.remove(&[key.to_string()]).await {
                warn!("⚠️ No se pudo eliminar el objeto '{}' del storage: {}", key, e);
            }
        }

        Ok(())
    }
}
