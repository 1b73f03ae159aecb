use std::sync::Arc;

use crate::appointments::operations::resolve_day;
use crate::appointments::{Appointment, ListProviderAppointmentsRequest};
use crate::cache::{
    deserialize_appointments, provider_appointments_key, serialize_appointments, CacheProvider,
};
use crate::error::ServiceResult;
use crate::storage::AppointmentRepository;

/// Lists a provider's appointments on one day, read through the cache.
pub struct ListProviderAppointmentsService {
    appointments: Arc<dyn AppointmentRepository>,
    cache: Arc<dyn CacheProvider>,
}

impl ListProviderAppointmentsService {
    pub fn new(appointments: Arc<dyn AppointmentRepository>, cache: Arc<dyn CacheProvider>) -> Self {
        Self {
            appointments,
            cache,
        }
    }

    /// Returns the provider's appointments on the requested day, ordered by
    /// date.
    ///
    /// A cached list is returned as-is. On a miss the repository is queried
    /// and the result stored before returning. Cache failures only cost the
    /// shortcut; they never fail the request.
    pub async fn execute(
        &self,
        request: ListProviderAppointmentsRequest,
    ) -> ServiceResult<Vec<Appointment>> {
        let day = resolve_day(request.year, request.month, request.day)?;
        let cache_key = provider_appointments_key(request.provider_id, day);

        match self.cache.recover(&cache_key).await {
            Ok(Some(bytes)) => match deserialize_appointments(&bytes) {
                Ok(appointments) => {
                    tracing::trace!(key = %cache_key, "Cache hit");
                    return Ok(appointments);
                }
                Err(err) => {
                    tracing::warn!(key = %cache_key, error = %err, "Discarding unreadable cache entry");
                }
            },
            Ok(None) => {
                tracing::trace!(key = %cache_key, "Cache miss");
            }
            Err(err) => {
                tracing::warn!(key = %cache_key, error = %err, "Cache read failed");
            }
        }

        let appointments = self
            .appointments
            .find_all_in_day_from_provider(request.provider_id, day)
            .await?;

        match serialize_appointments(&appointments) {
            Ok(bytes) => {
                if let Err(err) = self.cache.save(&cache_key, &bytes).await {
                    tracing::warn!(key = %cache_key, error = %err, "Cache write failed");
                } else {
                    tracing::debug!(key = %cache_key, count = appointments.len(), "Cached appointments");
                }
            }
            Err(err) => {
                tracing::warn!(key = %cache_key, error = %err, "Failed to serialize appointments");
            }
        }

        Ok(appointments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{serialize_appointments, CacheProvider};
    use crate::fakes::{at, FakeAppointmentsRepository, FakeCacheProvider, UnavailableCacheProvider};
    use crate::storage::CreateAppointmentData;
    use uuid::Uuid;

    async fn book(
        repository: &FakeAppointmentsRepository,
        provider_id: Uuid,
        date: chrono::NaiveDateTime,
    ) -> Appointment {
        repository
            .create(CreateAppointmentData {
                provider_id,
                user_id: Uuid::new_v4(),
                date,
            })
            .await
            .unwrap()
    }

    fn request(provider_id: Uuid, day: u32, month: u32, year: i32) -> ListProviderAppointmentsRequest {
        ListProviderAppointmentsRequest {
            provider_id,
            day,
            month,
            year,
        }
    }

    #[tokio::test]
    async fn test_lists_appointments_of_the_day_in_order() {
        let repository = Arc::new(FakeAppointmentsRepository::new());
        let cache = Arc::new(FakeCacheProvider::new());
        let service = ListProviderAppointmentsService::new(repository.clone(), cache.clone());
        let provider_id = Uuid::new_v4();

        let first = book(&repository, provider_id, at(2020, 5, 20, 14)).await;
        let second = book(&repository, provider_id, at(2020, 5, 20, 15)).await;

        let appointments = service
            .execute(request(provider_id, 20, 5, 2020))
            .await
            .unwrap();

        assert_eq!(appointments, vec![first, second]);
    }

    #[tokio::test]
    async fn test_excludes_other_days_and_providers() {
        let repository = Arc::new(FakeAppointmentsRepository::new());
        let service =
            ListProviderAppointmentsService::new(repository.clone(), Arc::new(FakeCacheProvider::new()));
        let provider_id = Uuid::new_v4();

        let wanted = book(&repository, provider_id, at(2020, 5, 20, 9)).await;
        book(&repository, provider_id, at(2020, 5, 21, 9)).await;
        book(&repository, Uuid::new_v4(), at(2020, 5, 20, 10)).await;

        let appointments = service
            .execute(request(provider_id, 20, 5, 2020))
            .await
            .unwrap();

        assert_eq!(appointments, vec![wanted]);
    }

    #[tokio::test]
    async fn test_empty_day_is_not_an_error() {
        let service = ListProviderAppointmentsService::new(
            Arc::new(FakeAppointmentsRepository::new()),
            Arc::new(FakeCacheProvider::new()),
        );

        let appointments = service
            .execute(request(Uuid::new_v4(), 1, 1, 2021))
            .await
            .unwrap();

        assert!(appointments.is_empty());
    }

    #[tokio::test]
    async fn test_second_call_is_served_from_cache() {
        let repository = Arc::new(FakeAppointmentsRepository::new());
        let cache = Arc::new(FakeCacheProvider::new());
        let service = ListProviderAppointmentsService::new(repository.clone(), cache.clone());
        let provider_id = Uuid::new_v4();
        book(&repository, provider_id, at(2020, 5, 20, 14)).await;

        let first = service.execute(request(provider_id, 20, 5, 2020)).await.unwrap();
        assert!(cache.contains(&format!("provider-appointments:{provider_id}:2020-5-20")).await);

        let second = service.execute(request(provider_id, 20, 5, 2020)).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(repository.listing_queries(), 1);
    }

    #[tokio::test]
    async fn test_cached_list_is_returned_without_repository() {
        let repository = Arc::new(FakeAppointmentsRepository::new());
        let cache = Arc::new(FakeCacheProvider::new());
        let provider_id = Uuid::new_v4();
        let cached = vec![Appointment::new(provider_id, Uuid::new_v4(), at(2020, 5, 20, 8))];
        cache
            .save(
                &format!("provider-appointments:{provider_id}:2020-5-20"),
                &serialize_appointments(&cached).unwrap(),
            )
            .await
            .unwrap();
        let service = ListProviderAppointmentsService::new(repository.clone(), cache);

        let appointments = service.execute(request(provider_id, 20, 5, 2020)).await.unwrap();

        assert_eq!(appointments, cached);
        assert_eq!(repository.listing_queries(), 0);
    }

    #[tokio::test]
    async fn test_unreadable_cache_entry_falls_back_to_repository() {
        let repository = Arc::new(FakeAppointmentsRepository::new());
        let cache = Arc::new(FakeCacheProvider::new());
        let provider_id = Uuid::new_v4();
        let key = format!("provider-appointments:{provider_id}:2020-5-20");
        cache.save(&key, b"not json").await.unwrap();
        let stored = book(&repository, provider_id, at(2020, 5, 20, 10)).await;
        let service = ListProviderAppointmentsService::new(repository.clone(), cache.clone());

        let appointments = service.execute(request(provider_id, 20, 5, 2020)).await.unwrap();

        assert_eq!(appointments, vec![stored]);
        assert_eq!(repository.listing_queries(), 1);
    }

    #[tokio::test]
    async fn test_unavailable_cache_degrades_to_repository() {
        let repository = Arc::new(FakeAppointmentsRepository::new());
        let provider_id = Uuid::new_v4();
        let stored = book(&repository, provider_id, at(2020, 5, 20, 10)).await;
        let service =
            ListProviderAppointmentsService::new(repository.clone(), Arc::new(UnavailableCacheProvider));

        let appointments = service.execute(request(provider_id, 20, 5, 2020)).await.unwrap();

        assert_eq!(appointments, vec![stored]);
    }

    #[tokio::test]
    async fn test_invalid_date_is_rejected() {
        let service = ListProviderAppointmentsService::new(
            Arc::new(FakeAppointmentsRepository::new()),
            Arc::new(FakeCacheProvider::new()),
        );

        let err = service
            .execute(request(Uuid::new_v4(), 1, 13, 2020))
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), 400);
    }
}
