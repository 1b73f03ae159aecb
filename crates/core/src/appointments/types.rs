use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A booked slot with a provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: Uuid,
    pub provider_id: Uuid,
    /// The customer who booked the slot.
    pub user_id: Uuid,
    /// Local wall-clock start of the slot.
    pub date: NaiveDateTime,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Appointment {
    /// Creates a new appointment with a generated ID.
    pub fn new(provider_id: Uuid, user_id: Uuid, date: NaiveDateTime) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            provider_id,
            user_id,
            date,
            created_at: now,
            updated_at: now,
        }
    }

    /// Sets both creation and update timestamps.
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self.updated_at = created_at;
        self
    }
}

/// Availability of one bookable hour of a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayAvailability {
    pub hour: u32,
    pub available: bool,
}

/// Availability of one day of a month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthAvailability {
    pub day: u32,
    pub available: bool,
}
