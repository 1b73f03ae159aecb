//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use tokio::sync::RwLock;
use uuid::Uuid;

use gobarber_core::appointments::Appointment;
use gobarber_core::storage::{
    AppointmentRepository, CreateAppointmentData, CreateUserData, DateRange, RepositoryError,
    Result, UserRepository,
};
use gobarber_core::users::User;

/// In-memory storage backend.
///
/// Uses HashMaps wrapped in `Arc<RwLock<_>>` for thread-safe access.
/// Data is not persisted and will be lost when the repository is dropped.
#[derive(Debug, Clone)]
pub struct InMemoryRepository {
    appointments: Arc<RwLock<HashMap<Uuid, Appointment>>>,
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            appointments: Arc::new(RwLock::new(HashMap::new())),
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    async fn provider_appointments<F>(&self, provider_id: Uuid, keep: F) -> Vec<Appointment>
    where
        F: Fn(&NaiveDateTime) -> bool,
    {
        let appointments = self.appointments.read().await;
        let mut found: Vec<Appointment> = appointments
            .values()
            .filter(|a| a.provider_id == provider_id && keep(&a.date))
            .cloned()
            .collect();
        found.sort_by_key(|a| a.date);
        found
    }
}

#[async_trait]
impl AppointmentRepository for InMemoryRepository {
    async fn create(&self, data: CreateAppointmentData) -> Result<Appointment> {
        let appointment = Appointment::new(data.provider_id, data.user_id, data.date);
        let mut appointments = self.appointments.write().await;
        appointments.insert(appointment.id, appointment.clone());
        Ok(appointment)
    }

    async fn find_by_date(
        &self,
        provider_id: Uuid,
        date: NaiveDateTime,
    ) -> Result<Option<Appointment>> {
        let appointments = self.appointments.read().await;
        Ok(appointments
            .values()
            .find(|a| a.provider_id == provider_id && a.date == date)
            .cloned())
    }

    async fn find_all_in_day_from_provider(
        &self,
        provider_id: Uuid,
        day: NaiveDate,
    ) -> Result<Vec<Appointment>> {
        Ok(self
            .provider_appointments(provider_id, |date| date.date() == day)
            .await)
    }

    async fn find_all_in_month_from_provider(
        &self,
        provider_id: Uuid,
        month: DateRange,
    ) -> Result<Vec<Appointment>> {
        Ok(self
            .provider_appointments(provider_id, |date| month.contains(date))
            .await)
    }
}

#[async_trait]
impl UserRepository for InMemoryRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn find_all_providers(&self, except_user_id: Option<Uuid>) -> Result<Vec<User>> {
        let users = self.users.read().await;
        let mut providers: Vec<User> = users
            .values()
            .filter(|u| Some(u.id) != except_user_id)
            .cloned()
            .collect();
        providers.sort_by(|a, b| a.name.cmp(&b.name).then(a.created_at.cmp(&b.created_at)));
        Ok(providers)
    }

    async fn create(&self, data: CreateUserData) -> Result<User> {
        let mut users = self.users.write().await;
        if users.values().any(|u| u.email == data.email) {
            return Err(RepositoryError::AlreadyExists {
                entity_type: "User",
                id: data.email,
            });
        }
        let user = User::new(data.name, data.email, data.password);
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn save(&self, user: &User) -> Result<User> {
        let mut users = self.users.write().await;
        if !users.contains_key(&user.id) {
            return Err(RepositoryError::NotFound {
                entity_type: "User",
                id: user.id.to_string(),
            });
        }
        if users
            .values()
            .any(|u| u.id != user.id && u.email == user.email)
        {
            return Err(RepositoryError::AlreadyExists {
                entity_type: "User",
                id: user.email.clone(),
            });
        }
        users.insert(user.id, user.clone());
        Ok(user.clone())
    }
}
