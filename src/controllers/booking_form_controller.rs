//! Formularios de entrega y recogida de una reserva

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::booking_form_dto::{BookingFormResponse, SubmitBookingFormRequest};
use crate::dto::common::ApiResponse;
use crate::models::booking_form::FormType;
use crate::repositories::booking_form_repository::{BookingFormRecord, BookingFormRepository};
use crate::repositories::booking_repository::BookingRepository;
use crate::utils::errors::{AppError, AppResult};

pub struct BookingFormController {
    repository: BookingFormRepository,
    booking_repository: BookingRepository,
}

impl BookingFormController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: BookingFormRepository::new(pool.clone()),
            booking_repository: BookingRepository::new(pool),
        }
    }

    /// Enviar el formulario de inspección. El upsert es atómico sobre
    /// (booking_id, form_type): el último envío gana.
    pub async fn submit(
        &self,
        booking_id: Uuid,
        request: SubmitBookingFormRequest,
    ) -> AppResult<ApiResponse<BookingFormResponse>> {
        request.validate()?;

        self.booking_repository
            .find_by_id(booking_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Reserva no encontrada".to_string()))?;

        let photos = serde_json::json!(request.photos.unwrap_or_default());

        let form = self
            .repository
            .upsert(
                booking_id,
                request.form_type,
                BookingFormRecord {
                    mileage: request.mileage,
                    fuel_level: request.fuel_level,
                    damages: request.damages,
                    customer_signature: request.customer_signature,
                    agent_signature: request.agent_signature,
                    photos,
                },
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            form.into(),
            "Formulario guardado exitosamente".to_string(),
        ))
    }

    pub async fn list_by_booking(&self, booking_id: Uuid) -> AppResult<Vec<BookingFormResponse>> {
        let forms = self.repository.find_by_booking(booking_id).await?;
        Ok(forms.into_iter().map(Into::into).collect())
    }

    pub async fn get_by_type(
        &self,
        booking_id: Uuid,
        form_type: FormType,
    ) -> AppResult<BookingFormResponse> {
        let form = self
            .repository
            .find_by_booking_and_type(booking_id, form_type)
            .await?
            .ok_or_else(|| AppError::NotFound("Formulario no encontrado".to_string()))?;

        Ok(form.into())
    }
}
