//! DTOs de clientes

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::customer::Customer;

/// Request para crear un cliente
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCustomerRequest {
    #[validate(length(min = 2, max = 200))]
    pub full_name: String,

    #[validate(email)]
    pub email: Option<String>,

    #[validate(length(min = 5, max = 50))]
    pub phone: Option<String>,

    pub address: Option<String>,
}

/// Request para actualizar un cliente existente
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCustomerRequest {
    #[validate(length(min = 2, max = 200))]
    pub full_name: Option<String>,

    #[validate(email)]
    pub email: Option<String>,

    #[validate(length(min = 5, max = 50))]
    pub phone: Option<String>,

    pub address: Option<String>,
}

/// Response de cliente para la API
#[derive(Debug, Serialize)]
pub struct CustomerResponse {
    pub id: Uuid,
    pub full_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Customer> for CustomerResponse {
    fn from(customer: Customer) -> Self {
        Self {
            id: customer.id,
            full_name: customer.full_name,
            email: customer.email,
            phone: customer.phone,
            address: customer.address,
            created_at: customer.created_at,
            updated_at: customer.updated_at,
        }
    }
}
