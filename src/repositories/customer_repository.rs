use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::customer::Customer;
use crate::utils::errors::{AppError, AppResult};

pub struct CustomerRepository {
    pool: PgPool,
}

impl CustomerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        full_name: String,
        email: Option<String>,
        phone: Option<String>,
        address: Option<String>,
    ) -> AppResult<Customer> {
        let customer = sqlx::query_as::<_, Customer>(
            r#"
            INSERT INTO customers (id, full_name, email, phone, address, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $6)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(full_name)
        .bind(email)
        .bind(phone)
        .bind(address)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(customer)
    }

    pub async fn find_all(&self) -> AppResult<Vec<Customer>> {
        let customers = sqlx::query_as::<_, Customer>(
            "SELECT * FROM customers ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(customers)
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Customer>> {
        let customer = sqlx::query_as::<_, Customer>("SELECT * FROM customers WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(customer)
    }

    pub async fn update(
        &self,
        id: Uuid,
        full_name: Option<String>,
        email: Option<String>,
        phone: Option<String>,
        address: Option<String>,
    ) -> AppResult<Customer> {
        // Obtener cliente actual y fusionar campos parciales
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Cliente no encontrado".to_string()))?;

        let customer = sqlx::query_as::<_, Customer>(
            r#"
            UPDATE customers
            SET full_name = $2, email = $3, phone = $4, address = $5, updated_at = $6
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(full_name.unwrap_or(current.full_name))
        .bind(email.or(current.email))
        .bind(phone.or(current.phone))
        .bind(address.or(current.address))
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(customer)
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM customers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
