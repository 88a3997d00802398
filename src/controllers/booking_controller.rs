//! Workflow de mutación de reservas
//!
//! Alta, actualización parcial y borrado. El alta calcula siempre los campos
//! derivados; la actualización relee la fila actual, fusiona y recalcula solo
//! si el request toca fechas o tarifa, y pasa el guard de disponibilidad si
//! cambian fechas, tarifa o vehículo. Toda mutación exitosa invalida el
//! recurso `bookings` del cache.

use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::cache::resource_cache::{resources, ResourceCache};
use crate::config::environment::AvailabilityPolicy;
use crate::dto::booking_dto::{
    AvailabilityQuery, BookingResponse, CreateBookingRequest, UpdateBookingRequest,
};
use crate::dto::common::ApiResponse;
use crate::models::booking::{Booking, BookingStatus};
use crate::repositories::booking_repository::{BookingRecord, BookingRepository};
use crate::services::availability_service::check_availability;
use crate::services::booking_service::compute_derived;
use crate::utils::errors::{AppError, AppResult};

pub struct BookingController {
    pool: PgPool,
    repository: BookingRepository,
    cache: ResourceCache,
    policy: AvailabilityPolicy,
}

impl BookingController {
    pub fn new(pool: PgPool, cache: ResourceCache, policy: AvailabilityPolicy) -> Self {
        Self {
            repository: BookingRepository::new(pool.clone()),
            pool,
            cache,
            policy,
        }
    }

    pub async fn create(
        &self,
        request: CreateBookingRequest,
    ) -> AppResult<ApiResponse<BookingResponse>> {
        if request.end_date < request.start_date {
            return Err(AppError::BadRequest(
                "La fecha de fin no puede ser anterior a la de inicio".to_string(),
            ));
        }

        if request.daily_rate < Decimal::ZERO {
            return Err(AppError::BadRequest(
                "La tarifa diaria no puede ser negativa".to_string(),
            ));
        }

        let available = check_availability(
            &self.pool,
            self.policy,
            Some(request.vehicle_id),
            Some(request.start_date),
            Some(request.end_date),
            None,
        )
        .await;

        if !available {
            return Err(AppError::Conflict(
                "El vehículo no está disponible en esas fechas".to_string(),
            ));
        }

        // El alta calcula siempre el par derivado
        let (duration_days, total_amount) =
            compute_derived(request.start_date, request.end_date, request.daily_rate);

        let booking = self
            .repository
            .create(BookingRecord {
                customer_id: request.customer_id,
                vehicle_id: request.vehicle_id,
                start_date: request.start_date,
                end_date: request.end_date,
                daily_rate: request.daily_rate,
                duration_days,
                total_amount,
                status: BookingStatus::from_str(request.status.as_deref().unwrap_or("pending"))
                    .as_str()
                    .to_string(),
                notes: request.notes,
            })
            .await?;

        self.cache.invalidate(resources::BOOKINGS).await;

        Ok(ApiResponse::success_with_message(
            booking.into(),
            "Reserva creada exitosamente".to_string(),
        ))
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateBookingRequest,
    ) -> AppResult<ApiResponse<BookingResponse>> {
        // Releer la fila persistida: el request puede traer solo una de las
        // tres entradas de las que dependen los derivados.
        let current = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Reserva no encontrada".to_string()))?;

        let start_date = request.start_date.unwrap_or(current.start_date);
        let end_date = request.end_date.unwrap_or(current.end_date);
        let daily_rate = request.daily_rate.unwrap_or(current.daily_rate);
        let vehicle_id = request.vehicle_id.unwrap_or(current.vehicle_id);

        let (duration_days, total_amount) = if request.touches_derived_inputs() {
            if end_date < start_date {
                return Err(AppError::BadRequest(
                    "La fecha de fin no puede ser anterior a la de inicio".to_string(),
                ));
            }

            compute_derived(start_date, end_date, daily_rate)
        } else {
            // Sin cambios en fechas ni tarifa los derivados no se tocan
            (current.duration_days, current.total_amount)
        };

        // Cambiar fechas, tarifa o vehículo puede crear un solape nuevo.
        // Al editar, la propia reserva se excluye del check.
        if request.touches_availability_inputs() {
            let available = check_availability(
                &self.pool,
                self.policy,
                Some(vehicle_id),
                Some(start_date),
                Some(end_date),
                Some(id),
            )
            .await;

            if !available {
                return Err(AppError::Conflict(
                    "El vehículo no está disponible en esas fechas".to_string(),
                ));
            }
        }

        let booking = self
            .repository
            .update(
                id,
                BookingRecord {
                    customer_id: request.customer_id.unwrap_or(current.customer_id),
                    vehicle_id,
                    start_date,
                    end_date,
                    daily_rate,
                    duration_days,
                    total_amount,
                    status: request
                        .status
                        .map(|s| BookingStatus::from_str(&s).as_str().to_string())
                        .unwrap_or(current.status),
                    notes: request.notes.or(current.notes),
                },
            )
            .await?
            .ok_or_else(|| AppError::NotFound("Reserva no encontrada".to_string()))?;

        self.cache.invalidate(resources::BOOKINGS).await;

        Ok(ApiResponse::success_with_message(
            booking.into(),
            "Reserva actualizada exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let deleted = self.repository.delete(id).await?;
        if !deleted {
            return Err(AppError::NotFound("Reserva no encontrada".to_string()));
        }

        self.cache.invalidate(resources::BOOKINGS).await;
        Ok(())
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<BookingResponse> {
        let booking = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Reserva no encontrada".to_string()))?;

        Ok(booking.into())
    }

    pub async fn list(&self) -> AppResult<Vec<BookingResponse>> {
        // Read-through sobre el recurso lógico `bookings`
        if let Ok(Some(cached)) = self.cache.get_list::<Booking>(resources::BOOKINGS).await {
            return Ok(cached.into_iter().map(Into::into).collect());
        }

        let bookings = self.repository.find_all().await?;
        if let Err(e) = self.cache.set_list(resources::BOOKINGS, &bookings).await {
            tracing::warn!("⚠️ No se pudo cachear el listado de reservas: {}", e);
        }

        Ok(bookings.into_iter().map(Into::into).collect())
    }

    /// Check de disponibilidad expuesto a la UI de reservas
    pub async fn availability(&self, query: AvailabilityQuery) -> bool {
        check_availability(
            &self.pool,
            self.policy,
            query.vehicle_id,
            query.start_date,
            query.end_date,
            query.exclude_booking_id,
        )
        .await
    }
}
