use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::document::CustomerDocument;
use crate::utils::errors::AppResult;

pub struct DocumentRepository {
    pool: PgPool,
}

impl DocumentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        customer_id: Uuid,
        document_type: String,
        name: String,
        file_url: String,
        file_size: Option<i64>,
        mime_type: Option<String>,
    ) -> AppResult<CustomerDocument> {
        let document = sqlx::query_as::<_, CustomerDocument>(
            r#"
            INSERT INTO customer_documents (id, customer_id, document_type, name,
                                            file_url, file_size, mime_type, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(customer_id)
        .bind(document_type)
        .bind(name)
        .bind(file_url)
        .bind(file_size)
        .bind(mime_type)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(document)
    }

    pub async fn find_by_customer(&self, customer_id: Uuid) -> AppResult<Vec<CustomerDocument>> {
        let documents = sqlx::query_as::<_, CustomerDocument>(
            "SELECT * FROM customer_documents WHERE customer_id = $1 ORDER BY created_at DESC",
        )
        .bind(customer_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(documents)
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<CustomerDocument>> {
        let document = sqlx::query_as::<_, CustomerDocument>(
            "SELECT * FROM customer_documents WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(document)
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM customer_documents WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
