//! Generación de contratos
//!
//! Resuelve la plantilla (explícita o la activa por defecto), construye el
//! mapa de variables a partir de la reserva con cliente y vehículo, sustituye
//! los placeholders `{{identificador}}` y persiste el resultado en la columna
//! estructurada `contract_data` de la reserva.

use std::collections::HashMap;

use chrono::Utc;
use lazy_static::lazy_static;
use regex::Regex;
use serde_json::json;
use sqlx::PgPool;
use tracing::{info, warn};
use uuid::Uuid;

use crate::dto::contract_dto::ContractResponse;
use crate::models::booking::BookingWithRelations;
use crate::models::contract_template::ContractTemplate;
use crate::repositories::booking_repository::BookingRepository;
use crate::repositories::contract_template_repository::ContractTemplateRepository;
use crate::utils::errors::{AppError, AppResult};

lazy_static! {
    static ref PLACEHOLDER_RE: Regex = Regex::new(r"\{\{\s*([A-Za-z0-9_]+)\s*\}\}").unwrap();
}

/// Sustituir cada `{{identificador}}` por su valor del mapa.
///
/// Los identificadores desconocidos se renderizan como `[identificador]`,
/// nunca se dejan tal cual ni producen error.
pub fn render_template(content: &str, variables: &HashMap<String, String>) -> String {
    PLACEHOLDER_RE
        .replace_all(content, |caps: &regex::Captures| {
            let identifier = &caps[1];
            match variables.get(identifier) {
                Some(value) => value.clone(),
                None => format!("[{}]", identifier),
            }
        })
        .into_owned()
}

/// Variables de ejemplo para la vista previa de plantillas
pub fn sample_variables() -> HashMap<String, String> {
    HashMap::from([
        ("customer_name".to_string(), "John Doe".to_string()),
        ("customer_email".to_string(), "john.doe@example.com".to_string()),
        ("vehicle".to_string(), "Toyota Corolla".to_string()),
        ("license_plate".to_string(), "1234-ABC".to_string()),
        ("pickup_date".to_string(), "2024-01-01".to_string()),
        ("return_date".to_string(), "2024-01-03".to_string()),
        ("total_amount".to_string(), "150".to_string()),
    ])
}

/// Construir el mapa de variables de una reserva concreta
pub fn build_variables(booking: &BookingWithRelations) -> HashMap<String, String> {
    HashMap::from([
        ("customer_name".to_string(), booking.customer_name.clone()),
        (
            "customer_email".to_string(),
            booking.customer_email.clone().unwrap_or_default(),
        ),
        (
            "vehicle".to_string(),
            format!("{} {}", booking.vehicle_brand, booking.vehicle_model),
        ),
        (
            "license_plate".to_string(),
            booking.vehicle_license_plate.clone(),
        ),
        ("pickup_date".to_string(), booking.start_date.to_string()),
        ("return_date".to_string(), booking.end_date.to_string()),
        ("total_amount".to_string(), booking.total_amount.to_string()),
    ])
}

/// Datos de contrato heredados del sistema anterior, que los serializaba
/// dentro del campo de texto `notes` bajo la clave `contract_data`.
pub fn legacy_contract_data(notes: Option<&str>) -> Option<serde_json::Value> {
    let parsed: serde_json::Value = serde_json::from_str(notes?).ok()?;
    parsed.get("contract_data").cloned()
}

pub struct ContractService {
    booking_repository: BookingRepository,
    template_repository: ContractTemplateRepository,
}

impl ContractService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            booking_repository: BookingRepository::new(pool.clone()),
            template_repository: ContractTemplateRepository::new(pool),
        }
    }

    /// Resolver la plantilla: la indicada, o la única marcada como activa
    async fn resolve_template(
        &self,
        template_id: Option<Uuid>,
    ) -> AppResult<ContractTemplate> {
        match template_id {
            Some(id) => self
                .template_repository
                .find_by_id(id)
                .await?
                .ok_or_else(|| AppError::NotFound("Plantilla de contrato no encontrada".to_string())),
            None => self
                .template_repository
                .find_active()
                .await?
                .ok_or_else(|| AppError::NotFound("No hay plantilla de contrato activa".to_string())),
        }
    }

    /// Generar el contrato de una reserva y persistir su asociación
    pub async fn create_contract_for_booking(
        &self,
        booking_id: Uuid,
        template_id: Option<Uuid>,
        auto_generate_pdf: bool,
    ) -> AppResult<ContractResponse> {
        let booking = self
            .booking_repository
            .find_with_relations(booking_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Reserva no encontrada".to_string()))?;

        let template = self.resolve_template(template_id).await?;

        let variables = build_variables(&booking);
        let content = render_template(&template.content, &variables);
        let generated_at = Utc::now();

        let contract_data = json!({
            "template_id": template.id,
            "template_name": template.name,
            "variables": variables,
            "generated_at": generated_at,
        });

        self.booking_repository
            .set_contract_data(booking_id, &contract_data)
            .await?;

        info!(
            "📄 Contrato generado para reserva {} con plantilla '{}'",
            booking_id, template.name
        );

        if auto_generate_pdf {
            // Punto de extensión: la generación de PDF no está implementada,
            // el caller no debe asumir que se produjo ningún fichero.
            warn!("⚠️ auto_generate_pdf solicitado pero no implementado");
        }

        Ok(ContractResponse {
            booking_id,
            template_id: template.id,
            template_name: template.name,
            content,
            variables: json!(variables),
            generated_at,
        })
    }

    /// Datos de contrato de una reserva, incluyendo el encoding heredado
    pub async fn contract_data_for_booking(
        &self,
        booking_id: Uuid,
    ) -> AppResult<Option<serde_json::Value>> {
        let booking = self
            .booking_repository
            .find_by_id(booking_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Reserva no encontrada".to_string()))?;

        // Preferir la columna estructurada; caer al encoding dentro de notes
        // para filas escritas por el sistema anterior.
        Ok(booking
            .contract_data
            .or_else(|| legacy_contract_data(booking.notes.as_deref())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_known_and_unknown_placeholders() {
        let output = render_template(
            "Hello {{customer_name}}, car {{unknown_key}}",
            &sample_variables(),
        );
        assert_eq!(output, "Hello John Doe, car [unknown_key]");
    }

    #[test]
    fn test_render_vehicle_and_plate() {
        let output = render_template(
            "Vehículo {{vehicle}} con matrícula {{license_plate}}",
            &sample_variables(),
        );
        assert_eq!(output, "Vehículo Toyota Corolla con matrícula 1234-ABC");
    }

    #[test]
    fn test_render_with_whitespace_inside_braces() {
        let output = render_template("Total: {{ total_amount }}", &sample_variables());
        assert_eq!(output, "Total: 150");
    }

    #[test]
    fn test_render_repeated_placeholder() {
        let output = render_template(
            "{{customer_name}} / {{customer_name}}",
            &sample_variables(),
        );
        assert_eq!(output, "John Doe / John Doe");
    }

    #[test]
    fn test_render_without_placeholders() {
        let content = "Contrato sin variables";
        assert_eq!(render_template(content, &sample_variables()), content);
    }

    #[test]
    fn test_build_variables_from_booking() {
        let booking = BookingWithRelations {
            id: Uuid::new_v4(),
            customer_id: Uuid::new_v4(),
            vehicle_id: Uuid::new_v4(),
            start_date: chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date: chrono::NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(),
            daily_rate: "50".parse().unwrap(),
            duration_days: 3,
            total_amount: "150".parse().unwrap(),
            status: "confirmed".to_string(),
            notes: None,
            contract_data: None,
            customer_name: "Ana García".to_string(),
            customer_email: None,
            vehicle_brand: "Seat".to_string(),
            vehicle_model: "Ibiza".to_string(),
            vehicle_license_plate: "5678-XYZ".to_string(),
        };

        let vars = build_variables(&booking);
        assert_eq!(vars["vehicle"], "Seat Ibiza");
        assert_eq!(vars["license_plate"], "5678-XYZ");
        assert_eq!(vars["customer_email"], "");
        assert_eq!(vars["total_amount"], "150");
    }

    #[test]
    fn test_legacy_contract_data_from_notes() {
        let notes = r#"{"contract_data":{"template_name":"Standard"}}"#;
        let data = legacy_contract_data(Some(notes)).unwrap();
        assert_eq!(data["template_name"], "Standard");
    }

    #[test]
    fn test_legacy_contract_data_plain_text_notes() {
        assert!(legacy_contract_data(Some("cliente VIP, llamar antes")).is_none());
        assert!(legacy_contract_data(None).is_none());
    }
}
