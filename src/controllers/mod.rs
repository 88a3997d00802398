//! Controllers
//!
//! Orquestan cada operación: validación, repositorios, guard de
//! disponibilidad e invalidación de cache.

pub mod booking_controller;
pub mod booking_form_controller;
pub mod contract_controller;
pub mod customer_controller;
pub mod document_controller;
pub mod vehicle_controller;
