//! In-memory collaborators used by the service tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::appointments::Appointment;
use crate::cache::{self, pattern_matches, prefix_pattern, CacheError, CacheProvider};
use crate::providers::{self, HashProvider, StorageProvider};
use crate::storage::{
    self, AppointmentRepository, CreateAppointmentData, CreateUserData, DateRange, UserRepository,
};
use crate::users::User;

/// Users kept in insertion order.
#[derive(Default)]
pub struct FakeUsersRepository {
    users: RwLock<Vec<User>>,
}

impl FakeUsersRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for FakeUsersRepository {
    async fn find_by_id(&self, id: Uuid) -> storage::Result<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|user| user.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> storage::Result<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|user| user.email == email).cloned())
    }

    async fn find_all_providers(&self, except_user_id: Option<Uuid>) -> storage::Result<Vec<User>> {
        let users = self.users.read().await;
        Ok(users
            .iter()
            .filter(|user| Some(user.id) != except_user_id)
            .cloned()
            .collect())
    }

    async fn create(&self, data: CreateUserData) -> storage::Result<User> {
        let user = User::new(data.name, data.email, data.password);
        self.users.write().await.push(user.clone());
        Ok(user)
    }

    async fn save(&self, user: &User) -> storage::Result<User> {
        let mut users = self.users.write().await;
        match users.iter_mut().find(|stored| stored.id == user.id) {
            Some(stored) => *stored = user.clone(),
            None => users.push(user.clone()),
        }
        Ok(user.clone())
    }
}

/// Appointments kept in insertion order. Counts listing queries so tests can
/// tell whether a cache answered instead.
#[derive(Default)]
pub struct FakeAppointmentsRepository {
    appointments: RwLock<Vec<Appointment>>,
    listing_queries: AtomicUsize,
}

impl FakeAppointmentsRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn listing_queries(&self) -> usize {
        self.listing_queries.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AppointmentRepository for FakeAppointmentsRepository {
    async fn create(&self, data: CreateAppointmentData) -> storage::Result<Appointment> {
        let appointment = Appointment::new(data.provider_id, data.user_id, data.date);
        self.appointments.write().await.push(appointment.clone());
        Ok(appointment)
    }

    async fn find_by_date(
        &self,
        provider_id: Uuid,
        date: NaiveDateTime,
    ) -> storage::Result<Option<Appointment>> {
        let appointments = self.appointments.read().await;
        Ok(appointments
            .iter()
            .find(|a| a.provider_id == provider_id && a.date == date)
            .cloned())
    }

    async fn find_all_in_day_from_provider(
        &self,
        provider_id: Uuid,
        day: NaiveDate,
    ) -> storage::Result<Vec<Appointment>> {
        self.listing_queries.fetch_add(1, Ordering::SeqCst);
        let appointments = self.appointments.read().await;
        Ok(appointments
            .iter()
            .filter(|a| a.provider_id == provider_id && a.date.date() == day)
            .cloned()
            .collect())
    }

    async fn find_all_in_month_from_provider(
        &self,
        provider_id: Uuid,
        month: DateRange,
    ) -> storage::Result<Vec<Appointment>> {
        self.listing_queries.fetch_add(1, Ordering::SeqCst);
        let appointments = self.appointments.read().await;
        Ok(appointments
            .iter()
            .filter(|a| a.provider_id == provider_id && month.contains(&a.date))
            .cloned()
            .collect())
    }
}

/// Map-backed cache without expiry.
#[derive(Default)]
pub struct FakeCacheProvider {
    entries: RwLock<HashMap<String, Vec<u8>>>,
}

impl FakeCacheProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn contains(&self, key: &str) -> bool {
        self.entries.read().await.contains_key(key)
    }
}

#[async_trait]
impl CacheProvider for FakeCacheProvider {
    async fn save(&self, key: &str, value: &[u8]) -> cache::Result<()> {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_vec());
        Ok(())
    }

    async fn recover(&self, key: &str) -> cache::Result<Option<Vec<u8>>> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn invalidate(&self, key: &str) -> cache::Result<()> {
        self.entries.write().await.remove(key);
        Ok(())
    }

    async fn invalidate_prefix(&self, prefix: &str) -> cache::Result<()> {
        let pattern = prefix_pattern(prefix);
        self.entries
            .write()
            .await
            .retain(|key, _| !pattern_matches(&pattern, key));
        Ok(())
    }
}

/// Cache whose every operation fails, as when the backend is down.
pub struct UnavailableCacheProvider;

#[async_trait]
impl CacheProvider for UnavailableCacheProvider {
    async fn save(&self, _key: &str, _value: &[u8]) -> cache::Result<()> {
        Err(CacheError::ConnectionFailed("connection refused".to_string()))
    }

    async fn recover(&self, _key: &str) -> cache::Result<Option<Vec<u8>>> {
        Err(CacheError::ConnectionFailed("connection refused".to_string()))
    }

    async fn invalidate(&self, _key: &str) -> cache::Result<()> {
        Err(CacheError::ConnectionFailed("connection refused".to_string()))
    }

    async fn invalidate_prefix(&self, _prefix: &str) -> cache::Result<()> {
        Err(CacheError::ConnectionFailed("connection refused".to_string()))
    }
}

/// "Hashes" by returning the payload unchanged.
pub struct FakeHashProvider;

#[async_trait]
impl HashProvider for FakeHashProvider {
    async fn generate_hash(&self, payload: &str) -> providers::Result<String> {
        Ok(payload.to_string())
    }

    async fn compare_hash(&self, payload: &str, hashed: &str) -> providers::Result<bool> {
        Ok(payload == hashed)
    }
}

/// Records stored filenames instead of touching the disk.
#[derive(Default)]
pub struct FakeStorageProvider {
    files: RwLock<Vec<String>>,
}

impl FakeStorageProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn files(&self) -> Vec<String> {
        self.files.read().await.clone()
    }
}

#[async_trait]
impl StorageProvider for FakeStorageProvider {
    async fn save_file(&self, file: &str) -> providers::Result<String> {
        self.files.write().await.push(file.to_string());
        Ok(file.to_string())
    }

    async fn delete_file(&self, file: &str) -> providers::Result<()> {
        self.files.write().await.retain(|stored| stored != file);
        Ok(())
    }
}

/// A fixed clock for 2020-05-10 12:00.
pub fn may_10_noon() -> NaiveDateTime {
    at(2020, 5, 10, 12)
}

/// Builds a local timestamp at the start of an hour.
pub fn at(year: i32, month: u32, day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, 0, 0))
        .unwrap()
}
