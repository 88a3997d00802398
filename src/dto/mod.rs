//! DTOs de la API
//!
//! Requests y responses serializables de cada recurso.

pub mod booking_dto;
pub mod booking_form_dto;
pub mod common;
pub mod contract_dto;
pub mod customer_dto;
pub mod document_dto;
pub mod vehicle_dto;
