//! Modelos del sistema
//!
//! Este módulo contiene todos los modelos de datos que mapean exactamente
//! al schema PostgreSQL con las convenciones estándar.

pub mod booking;
pub mod booking_form;
pub mod contract_template;
pub mod customer;
pub mod document;
pub mod vehicle;
