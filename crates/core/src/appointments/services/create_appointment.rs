use std::sync::Arc;

use chrono::Timelike;

use crate::appointments::operations::{is_bookable_hour, local_now, start_of_hour, Clock};
use crate::appointments::{Appointment, CreateAppointmentRequest};
use crate::cache::{provider_appointments_key, CacheProvider};
use crate::error::{AppError, ServiceResult};
use crate::storage::{AppointmentRepository, CreateAppointmentData};

/// Books a one-hour slot with a provider.
pub struct CreateAppointmentService {
    appointments: Arc<dyn AppointmentRepository>,
    cache: Arc<dyn CacheProvider>,
    clock: Clock,
}

impl CreateAppointmentService {
    pub fn new(appointments: Arc<dyn AppointmentRepository>, cache: Arc<dyn CacheProvider>) -> Self {
        Self {
            appointments,
            cache,
            clock: local_now,
        }
    }

    /// Replaces the clock used to reject past dates.
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub async fn execute(&self, request: CreateAppointmentRequest) -> ServiceResult<Appointment> {
        let date = start_of_hour(request.date);

        if date < (self.clock)() {
            return Err(AppError::new("You can't create an appointment on a past date.").into());
        }

        if request.user_id == request.provider_id {
            return Err(AppError::new("You can't create an appointment with yourself.").into());
        }

        if !is_bookable_hour(date.hour()) {
            return Err(
                AppError::new("You can only create appointments between 8am and 5pm.").into(),
            );
        }

        if self
            .appointments
            .find_by_date(request.provider_id, date)
            .await?
            .is_some()
        {
            return Err(AppError::new("This appointment is already booked.").into());
        }

        let appointment = self
            .appointments
            .create(CreateAppointmentData {
                provider_id: request.provider_id,
                user_id: request.user_id,
                date,
            })
            .await?;

        let cache_key = provider_appointments_key(appointment.provider_id, date.date());
        if let Err(err) = self.cache.invalidate(&cache_key).await {
            tracing::warn!(key = %cache_key, error = %err, "Failed to invalidate cache");
        }

        tracing::info!(
            appointment_id = %appointment.id,
            provider_id = %appointment.provider_id,
            date = %appointment.date,
            "Created appointment"
        );

        Ok(appointment)
    }
}
