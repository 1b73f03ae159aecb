use std::sync::Arc;

use crate::appointments::operations::{day_availability, local_now, resolve_day, Clock};
use crate::appointments::{DayAvailability, ListProviderDayAvailabilityRequest};
use crate::error::ServiceResult;
use crate::storage::AppointmentRepository;

/// Reports which bookable hours of a day a provider still has free.
pub struct ListProviderDayAvailabilityService {
    appointments: Arc<dyn AppointmentRepository>,
    clock: Clock,
}

impl ListProviderDayAvailabilityService {
    pub fn new(appointments: Arc<dyn AppointmentRepository>) -> Self {
        Self {
            appointments,
            clock: local_now,
        }
    }

    /// Replaces the clock used to close past hours.
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub async fn execute(
        &self,
        request: ListProviderDayAvailabilityRequest,
    ) -> ServiceResult<Vec<DayAvailability>> {
        let day = resolve_day(request.year, request.month, request.day)?;

        let appointments = self
            .appointments
            .find_all_in_day_from_provider(request.provider_id, day)
            .await?;

        Ok(day_availability(day, &appointments, (self.clock)()))
    }
}
