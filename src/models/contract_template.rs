//! Modelo de Contract Template
//!
//! El contenido es HTML con placeholders `{{identificador}}`. Se asume que
//! hay como mucho una plantilla marcada como activa; el sistema no lo fuerza.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ContractTemplate {
    pub id: Uuid,
    pub name: String,
    pub content: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
