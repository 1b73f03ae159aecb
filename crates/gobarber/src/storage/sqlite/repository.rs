//! SQLite repository implementation.
//!
//! Implements the repository traits from `gobarber_core::storage` using SQLite.

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use tokio_rusqlite::Connection;
use uuid::Uuid;

use gobarber_core::appointments::Appointment;
use gobarber_core::storage::{
    AppointmentRepository, CreateAppointmentData, CreateUserData, DateRange, RepositoryError,
    Result, UserRepository,
};
use gobarber_core::users::User;

use super::conversions::{
    format_appointment_date, format_datetime, row_to_appointment, row_to_user,
};
use super::error::{map_tokio_rusqlite_error, map_tokio_rusqlite_error_with_id};
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

const LAST_SECOND: NaiveTime = match NaiveTime::from_hms_opt(23, 59, 59) {
    Some(time) => time,
    None => NaiveTime::MIN,
};

fn start_of(day: NaiveDate) -> NaiveDateTime {
    day.and_time(NaiveTime::MIN)
}

/// Inclusive upper bound for a day; stays representable on `NaiveDate::MAX`.
fn end_of(day: NaiveDate) -> NaiveDateTime {
    day.and_time(LAST_SECOND)
}

/// SQLite-based repository implementation.
///
/// Provides async access to SQLite storage for users and appointments.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Creates a new repository with a file-based database.
    ///
    /// The database file will be created if it doesn't exist.
    /// Schema tables are created automatically.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Creates a new repository with an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Initialize the database schema.
    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }

    /// Appointments of a provider with `start <= date < end`, ordered by date.
    async fn appointments_between(
        &self,
        provider_id: Uuid,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Vec<Appointment>> {
        let provider_id_str = provider_id.to_string();
        let start_str = format_appointment_date(&start);
        let end_str = format_appointment_date(&end);

        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_APPOINTMENTS_BY_PROVIDER_AND_RANGE)
                    .map_err(wrap_err)?;
                let rows = stmt
                    .query_map([&provider_id_str, &start_str, &end_str], row_to_appointment)
                    .map_err(wrap_err)?;

                let mut appointments = Vec::new();
                for row_result in rows {
                    appointments.push(row_result.map_err(wrap_err)?);
                }
                Ok(appointments)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Appointment"))
    }
}

// ============================================================================
// AppointmentRepository implementation
// ============================================================================

#[async_trait]
impl AppointmentRepository for SqliteRepository {
    async fn create(&self, data: CreateAppointmentData) -> Result<Appointment> {
        let appointment = Appointment::new(data.provider_id, data.user_id, data.date);

        let id = appointment.id.to_string();
        let provider_id = appointment.provider_id.to_string();
        let user_id = appointment.user_id.to_string();
        let date = format_appointment_date(&appointment.date);
        let created_at = format_datetime(&appointment.created_at);
        let updated_at = format_datetime(&appointment.updated_at);
        let appointment_id = appointment.id.to_string();

        self.conn
            .call(move |conn| {
                conn.execute(
                    schema::INSERT_APPOINTMENT,
                    rusqlite::params![id, provider_id, user_id, date, created_at, updated_at],
                )
                .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Appointment", appointment_id))?;

        Ok(appointment)
    }

    async fn find_by_date(
        &self,
        provider_id: Uuid,
        date: NaiveDateTime,
    ) -> Result<Option<Appointment>> {
        let provider_id_str = provider_id.to_string();
        let date_str = format_appointment_date(&date);

        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_APPOINTMENT_BY_DATE)
                    .map_err(wrap_err)?;
                match stmt.query_row([&provider_id_str, &date_str], row_to_appointment) {
                    Ok(appointment) => Ok(Some(appointment)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Appointment"))
    }

    async fn find_all_in_day_from_provider(
        &self,
        provider_id: Uuid,
        day: NaiveDate,
    ) -> Result<Vec<Appointment>> {
        self.appointments_between(provider_id, start_of(day), end_of(day))
            .await
    }

    async fn find_all_in_month_from_provider(
        &self,
        provider_id: Uuid,
        month: DateRange,
    ) -> Result<Vec<Appointment>> {
        self.appointments_between(provider_id, start_of(month.start), end_of(month.end))
            .await
    }
}

// ============================================================================
// UserRepository implementation
// ============================================================================

#[async_trait]
impl UserRepository for SqliteRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>> {
        let id_str = id.to_string();

        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(schema::SELECT_USER_BY_ID).map_err(wrap_err)?;
                match stmt.query_row([&id_str], row_to_user) {
                    Ok(user) => Ok(Some(user)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "User", id.to_string()))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let email_str = email.to_string();

        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_USER_BY_EMAIL)
                    .map_err(wrap_err)?;
                match stmt.query_row([&email_str], row_to_user) {
                    Ok(user) => Ok(Some(user)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "User"))
    }

    async fn find_all_providers(&self, except_user_id: Option<Uuid>) -> Result<Vec<User>> {
        let except = except_user_id.map(|id| id.to_string());

        self.conn
            .call(move |conn| {
                let mut users = Vec::new();
                match except {
                    Some(except) => {
                        let mut stmt = conn
                            .prepare(schema::SELECT_PROVIDERS_EXCEPT)
                            .map_err(wrap_err)?;
                        for row_result in stmt.query_map([&except], row_to_user).map_err(wrap_err)? {
                            users.push(row_result.map_err(wrap_err)?);
                        }
                    }
                    None => {
                        let mut stmt = conn.prepare(schema::SELECT_PROVIDERS).map_err(wrap_err)?;
                        for row_result in stmt.query_map([], row_to_user).map_err(wrap_err)? {
                            users.push(row_result.map_err(wrap_err)?);
                        }
                    }
                }
                Ok(users)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "User"))
    }

    async fn create(&self, data: CreateUserData) -> Result<User> {
        let user = User::new(data.name, data.email, data.password);

        let id = user.id.to_string();
        let name = user.name.clone();
        let email = user.email.clone();
        let password = user.password.clone();
        let avatar = user.avatar.clone();
        let created_at = format_datetime(&user.created_at);
        let updated_at = format_datetime(&user.updated_at);
        let user_email = user.email.clone();

        self.conn
            .call(move |conn| {
                conn.execute(
                    schema::INSERT_USER,
                    rusqlite::params![id, name, email, password, avatar, created_at, updated_at],
                )
                .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "User", user_email))?;

        Ok(user)
    }

    async fn save(&self, user: &User) -> Result<User> {
        let id = user.id.to_string();
        let name = user.name.clone();
        let email = user.email.clone();
        let password = user.password.clone();
        let avatar = user.avatar.clone();
        let updated_at = format_datetime(&user.updated_at);
        let user_id = user.id.to_string();

        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(
                        schema::UPDATE_USER,
                        rusqlite::params![id, name, email, password, avatar, updated_at],
                    )
                    .map_err(wrap_err)?;
                if rows == 0 {
                    Err(wrap_err(rusqlite::Error::QueryReturnedNoRows))
                } else {
                    Ok(())
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "User", user_id))?;

        Ok(user.clone())
    }
}
