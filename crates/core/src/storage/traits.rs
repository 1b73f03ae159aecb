use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use uuid::Uuid;

use crate::appointments::Appointment;
use crate::users::User;

use super::{CreateAppointmentData, CreateUserData, DateRange, Result};

/// Repository for appointment operations.
///
/// Every listing returns appointments ordered by `date` ascending.
#[async_trait]
pub trait AppointmentRepository: Send + Sync {
    /// Creates a new appointment and returns it.
    async fn create(&self, data: CreateAppointmentData) -> Result<Appointment>;

    /// Gets the appointment a provider has at exactly `date`.
    async fn find_by_date(
        &self,
        provider_id: Uuid,
        date: NaiveDateTime,
    ) -> Result<Option<Appointment>>;

    /// Gets all appointments of a provider on a calendar day.
    async fn find_all_in_day_from_provider(
        &self,
        provider_id: Uuid,
        day: NaiveDate,
    ) -> Result<Vec<Appointment>>;

    /// Gets all appointments of a provider within a month.
    async fn find_all_in_month_from_provider(
        &self,
        provider_id: Uuid,
        month: DateRange,
    ) -> Result<Vec<Appointment>>;
}

/// Repository for user operations.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Gets a user by their ID.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>>;

    /// Gets a user by their email address.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>>;

    /// Gets every user that can be booked, optionally leaving one out.
    async fn find_all_providers(&self, except_user_id: Option<Uuid>) -> Result<Vec<User>>;

    /// Creates a new user and returns it.
    async fn create(&self, data: CreateUserData) -> Result<User>;

    /// Persists changes to an existing user and returns the stored version.
    async fn save(&self, user: &User) -> Result<User>;
}
