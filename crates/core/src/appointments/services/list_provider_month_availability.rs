use std::sync::Arc;

use crate::appointments::operations::{local_now, month_availability, resolve_month, Clock};
use crate::appointments::{ListProviderMonthAvailabilityRequest, MonthAvailability};
use crate::error::ServiceResult;
use crate::storage::AppointmentRepository;

/// Reports which days of a month a provider still has free slots on.
pub struct ListProviderMonthAvailabilityService {
    appointments: Arc<dyn AppointmentRepository>,
    clock: Clock,
}

impl ListProviderMonthAvailabilityService {
    pub fn new(appointments: Arc<dyn AppointmentRepository>) -> Self {
        Self {
            appointments,
            clock: local_now,
        }
    }

    /// Replaces the clock used to close past days.
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub async fn execute(
        &self,
        request: ListProviderMonthAvailabilityRequest,
    ) -> ServiceResult<Vec<MonthAvailability>> {
        let month = resolve_month(request.year, request.month)?;

        let appointments = self
            .appointments
            .find_all_in_month_from_provider(request.provider_id, month)
            .await?;

        Ok(month_availability(&month, &appointments, (self.clock)()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appointments::BOOKABLE_HOURS;
    use crate::fakes::{at, may_10_noon, FakeAppointmentsRepository};
    use crate::storage::CreateAppointmentData;
    use uuid::Uuid;

    #[tokio::test]
    async fn test_fully_booked_day_is_unavailable() {
        let repository = Arc::new(FakeAppointmentsRepository::new());
        let provider_id = Uuid::new_v4();
        for hour in BOOKABLE_HOURS {
            repository
                .create(CreateAppointmentData {
                    provider_id,
                    user_id: Uuid::new_v4(),
                    date: at(2020, 5, 20, hour),
                })
                .await
                .unwrap();
        }
        repository
            .create(CreateAppointmentData {
                provider_id,
                user_id: Uuid::new_v4(),
                date: at(2020, 5, 21, 8),
            })
            .await
            .unwrap();
        let service = ListProviderMonthAvailabilityService::new(repository).with_clock(may_10_noon);

        let availability = service
            .execute(ListProviderMonthAvailabilityRequest {
                provider_id,
                month: 5,
                year: 2020,
            })
            .await
            .unwrap();

        assert_eq!(availability.len(), 31);
        let day = |day: u32| availability.iter().find(|a| a.day == day).copied().unwrap();
        assert!(!day(20).available);
        assert!(day(21).available);
        assert!(!day(9).available);
        assert!(day(10).available);
    }

    #[tokio::test]
    async fn test_other_providers_do_not_count() {
        let repository = Arc::new(FakeAppointmentsRepository::new());
        let provider_id = Uuid::new_v4();
        let other = Uuid::new_v4();
        for hour in BOOKABLE_HOURS {
            repository
                .create(CreateAppointmentData {
                    provider_id: other,
                    user_id: Uuid::new_v4(),
                    date: at(2020, 5, 20, hour),
                })
                .await
                .unwrap();
        }
        let service = ListProviderMonthAvailabilityService::new(repository).with_clock(may_10_noon);

        let availability = service
            .execute(ListProviderMonthAvailabilityRequest {
                provider_id,
                month: 5,
                year: 2020,
            })
            .await
            .unwrap();

        assert!(availability.iter().filter(|a| a.day >= 10).all(|a| a.available));
    }

    #[tokio::test]
    async fn test_rejects_invalid_month() {
        let service =
            ListProviderMonthAvailabilityService::new(Arc::new(FakeAppointmentsRepository::new()));

        let err = service
            .execute(ListProviderMonthAvailabilityRequest {
                provider_id: Uuid::new_v4(),
                month: 13,
                year: 2020,
            })
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), 400);
    }
}
