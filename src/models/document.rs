//! Modelo de Customer Document

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Documento de cliente con su ubicación en el object storage
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CustomerDocument {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub document_type: String,
    pub name: String,
    pub file_url: String,
    pub file_size: Option<i64>,
    pub mime_type: Option<String>,
    pub created_at: DateTime<Utc>,
}
