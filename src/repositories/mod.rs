//! Repositorios de acceso a datos
//!
//! Un repositorio por tabla, con las consultas SQLx correspondientes.

pub mod booking_form_repository;
pub mod booking_repository;
pub mod contract_template_repository;
pub mod customer_repository;
pub mod document_repository;
pub mod vehicle_repository;
