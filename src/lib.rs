//! Backend de alquiler de coches
//!
//! Catálogo público del sitio de marketing y back-office de reservas,
//! flota, clientes, contratos y documentos.

pub mod cache;
pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
