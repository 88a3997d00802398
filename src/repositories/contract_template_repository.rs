use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::contract_template::ContractTemplate;
use crate::utils::errors::{AppError, AppResult};

pub struct ContractTemplateRepository {
    pool: PgPool,
}

impl ContractTemplateRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        name: String,
        content: String,
        is_active: bool,
    ) -> AppResult<ContractTemplate> {
        let template = sqlx::query_as::<_, ContractTemplate>(
            r#"
            INSERT INTO contract_templates (id, name, content, is_active, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $5)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(content)
        .bind(is_active)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(template)
    }

    pub async fn find_all(&self) -> AppResult<Vec<ContractTemplate>> {
        let templates = sqlx::query_as::<_, ContractTemplate>(
            "SELECT * FROM contract_templates ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(templates)
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<ContractTemplate>> {
        let template = sqlx::query_as::<_, ContractTemplate>(
            "SELECT * FROM contract_templates WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(template)
    }

    /// La plantilla marcada como activa. Se asume que hay como mucho una;
    /// si hubiera varias se toma la modificada más recientemente.
    pub async fn find_active(&self) -> AppResult<Option<ContractTemplate>> {
        let template = sqlx::query_as::<_, ContractTemplate>(
            "SELECT * FROM contract_templates WHERE is_active = true ORDER BY updated_at DESC LIMIT 1",
        )
        .fetch_optional(&self.pool)
        .await?;

        Ok(template)
    }

    pub async fn update(
        &self,
        id: Uuid,
        name: Option<String>,
        content: Option<String>,
        is_active: Option<bool>,
    ) -> AppResult<ContractTemplate> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Plantilla de contrato no encontrada".to_string()))?;

        let template = sqlx::query_as::<_, ContractTemplate>(
            r#"
            UPDATE contract_templates
            SET name = $2, content = $3, is_active = $4, updated_at = $5
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name.unwrap_or(current.name))
        .bind(content.unwrap_or(current.content))
        .bind(is_active.unwrap_or(current.is_active))
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(template)
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM contract_templates WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
