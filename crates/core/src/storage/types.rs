use chrono::{NaiveDate, NaiveDateTime};
use uuid::Uuid;

use super::DateRangeError;

/// A date range with inclusive start and end dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a date range for an entire month.
    pub fn month(year: i32, month: u32) -> Result<Self, DateRangeError> {
        let invalid = || DateRangeError::InvalidMonth { year, month };

        let start = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;

        // First of next month minus one day
        let end = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)
        }
        .and_then(|next| next.pred_opt())
        .ok_or_else(invalid)?;

        Ok(Self { start, end })
    }

    /// Returns true if the timestamp falls on a day inside this range.
    pub fn contains(&self, timestamp: &NaiveDateTime) -> bool {
        let date = timestamp.date();
        date >= self.start && date <= self.end
    }

    /// Number of days covered by the range.
    pub fn num_days(&self) -> u32 {
        (self.end - self.start).num_days() as u32 + 1
    }
}

/// Data needed to persist a new appointment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateAppointmentData {
    pub provider_id: Uuid,
    pub user_id: Uuid,
    pub date: NaiveDateTime,
}

/// Data needed to persist a new user. `password` is already hashed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateUserData {
    pub name: String,
    pub email: String,
    pub password: String,
}
