//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos
//! y conversión de tipos.

use chrono::NaiveDate;
use uuid::Uuid;
use validator::ValidationError;

/// Validar y convertir string a UUID
pub fn validate_uuid(value: &str) -> Result<Uuid, ValidationError> {
    Uuid::parse_str(value).map_err(|_| {
        let mut error = ValidationError::new("uuid");
        error.add_param("value".into(), &value.to_string());
        error
    })
}

/// Validar y convertir string a fecha
pub fn validate_date(value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        let mut error = ValidationError::new("date");
        error.add_param("value".into(), &value.to_string());
        error.add_param("format".into(), &"YYYY-MM-DD".to_string());
        error
    })
}

/// Validar que un string no esté vacío
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_empty");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_date_ok() {
        let date = validate_date("2024-01-03").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 3).unwrap());
    }

    #[test]
    fn test_validate_date_invalid() {
        assert!(validate_date("03/01/2024").is_err());
        assert!(validate_date("").is_err());
    }

    #[test]
    fn test_validate_not_empty() {
        assert!(validate_not_empty("hola").is_ok());
        assert!(validate_not_empty("   ").is_err());
    }
}
