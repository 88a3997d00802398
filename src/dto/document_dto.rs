//! DTOs de documentos de cliente

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::document::CustomerDocument;

/// Response de documento para la API
#[derive(Debug, Serialize)]
pub struct DocumentResponse {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub document_type: String,
    pub name: String,
    pub file_url: String,
    pub file_size: Option<i64>,
    pub mime_type: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<CustomerDocument> for DocumentResponse {
    fn from(document: CustomerDocument) -> Self {
        Self {
            id: document.id,
            customer_id: document.customer_id,
            document_type: document.document_type,
            name: document.name,
            file_url: document.file_url,
            file_size: document.file_size,
            mime_type: document.mime_type,
            created_at: document.created_at,
        }
    }
}
