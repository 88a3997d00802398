//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno y variables de configuración.

use std::env;

/// Política del guard de disponibilidad cuando la consulta remota falla.
///
/// `FailOpen` deja pasar la operación (preferir disponibilidad a consistencia);
/// `FailClosed` la bloquea. El comportamiento histórico del sistema es fail-open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvailabilityPolicy {
    FailOpen,
    FailClosed,
}

impl AvailabilityPolicy {
    pub fn from_env_value(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "fail_closed" | "failclosed" | "closed" => AvailabilityPolicy::FailClosed,
            _ => AvailabilityPolicy::FailOpen,
        }
    }

    /// Respuesta del guard cuando el check no se puede completar
    pub fn fallback(&self) -> bool {
        matches!(self, AvailabilityPolicy::FailOpen)
    }
}

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub cors_origins: Vec<String>,
    pub availability_policy: AvailabilityPolicy,
    // Object storage (documentos y fotos)
    pub storage_url: String,
    pub storage_bucket: String,
    pub storage_api_key: Option<String>,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: env::var("ENVIRONMENT").expect("ENVIRONMENT must be set"),
            port: env::var("PORT")
                .expect("PORT must be set")
                .parse()
                .expect("PORT must be a valid number"),
            host: env::var("HOST").expect("HOST must be set"),
            cors_origins: env::var("CORS_ORIGINS")
                .expect("CORS_ORIGINS must be set")
                .split(',')
                .map(|s| s.trim().to_string())
                .collect(),
            availability_policy: AvailabilityPolicy::from_env_value(
                &env::var("AVAILABILITY_POLICY").unwrap_or_else(|_| "fail_open".to_string()),
            ),
            storage_url: env::var("STORAGE_URL").expect("STORAGE_URL must be set"),
            storage_bucket: env::var("STORAGE_BUCKET").expect("STORAGE_BUCKET must be set"),
            storage_api_key: env::var("STORAGE_API_KEY").ok(),
        }
    }
}

impl EnvironmentConfig {
    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Verificar si estamos en modo producción
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Obtener la URL del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_availability_policy_parsing() {
        assert_eq!(
            AvailabilityPolicy::from_env_value("fail_closed"),
            AvailabilityPolicy::FailClosed
        );
        assert_eq!(
            AvailabilityPolicy::from_env_value("fail_open"),
            AvailabilityPolicy::FailOpen
        );
        // Valores desconocidos caen al comportamiento histórico
        assert_eq!(
            AvailabilityPolicy::from_env_value("whatever"),
            AvailabilityPolicy::FailOpen
        );
    }

    #[test]
    fn test_policy_fallback() {
        assert!(AvailabilityPolicy::FailOpen.fallback());
        assert!(!AvailabilityPolicy::FailClosed.fallback());
    }
}
