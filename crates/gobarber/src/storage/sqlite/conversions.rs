//! SQLite row conversion functions.
//!
//! Pure functions for converting between SQLite rows and domain types.

use chrono::{DateTime, NaiveDateTime, Utc};
use rusqlite::Row;
use uuid::Uuid;

use gobarber_core::appointments::Appointment;
use gobarber_core::users::User;

const APPOINTMENT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// ============================================================================
// User conversions
// ============================================================================

/// Convert a SQLite row to a User.
///
/// Expected columns: id, name, email, password, avatar, created_at, updated_at
pub fn row_to_user(row: &Row) -> rusqlite::Result<User> {
    let id: String = row.get(0)?;
    let name: String = row.get(1)?;
    let email: String = row.get(2)?;
    let password: String = row.get(3)?;
    let avatar: Option<String> = row.get(4)?;
    let created_at: String = row.get(5)?;
    let updated_at: String = row.get(6)?;

    Ok(User {
        id: parse_uuid(&id)?,
        name,
        email,
        password,
        avatar,
        created_at: parse_datetime(&created_at)?,
        updated_at: parse_datetime(&updated_at)?,
    })
}

// ============================================================================
// Appointment conversions
// ============================================================================

/// Convert a SQLite row to an Appointment.
///
/// Expected columns: id, provider_id, user_id, date, created_at, updated_at
pub fn row_to_appointment(row: &Row) -> rusqlite::Result<Appointment> {
    let id: String = row.get(0)?;
    let provider_id: String = row.get(1)?;
    let user_id: String = row.get(2)?;
    let date: String = row.get(3)?;
    let created_at: String = row.get(4)?;
    let updated_at: String = row.get(5)?;

    Ok(Appointment {
        id: parse_uuid(&id)?,
        provider_id: parse_uuid(&provider_id)?,
        user_id: parse_uuid(&user_id)?,
        date: parse_appointment_date(&date)?,
        created_at: parse_datetime(&created_at)?,
        updated_at: parse_datetime(&updated_at)?,
    })
}

// ============================================================================
// Helper functions
// ============================================================================

/// Parse a UUID from string.
fn parse_uuid(s: &str) -> rusqlite::Result<Uuid> {
    Uuid::parse_str(s).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
    })
}

/// Parse an appointment's local start time.
fn parse_appointment_date(s: &str) -> rusqlite::Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, APPOINTMENT_DATE_FORMAT).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
    })
}

/// Parse a datetime from RFC 3339 string.
fn parse_datetime(s: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
        })
}

/// Format a DateTime<Utc> for SQLite storage (RFC 3339).
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339()
}

/// Format an appointment date for SQLite storage. Sorts chronologically.
pub fn format_appointment_date(date: &NaiveDateTime) -> String {
    date.format(APPOINTMENT_DATE_FORMAT).to_string()
}
