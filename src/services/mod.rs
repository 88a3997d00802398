//! Services module
//!
//! Este módulo contiene la lógica de negocio de la aplicación: cálculo de
//! campos derivados, guard de disponibilidad, generación de contratos y
//! acceso al object storage.

pub mod availability_service;
pub mod booking_service;
pub mod contract_service;
pub mod storage_service;

pub use availability_service::check_availability;
pub use contract_service::ContractService;
pub use storage_service::StorageClient;
