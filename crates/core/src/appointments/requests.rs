//! Input types for the appointment services.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Input for booking a slot with a provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAppointmentRequest {
    pub provider_id: Uuid,
    pub user_id: Uuid,
    pub date: NaiveDateTime,
}

/// Input for listing a provider's appointments on one day.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ListProviderAppointmentsRequest {
    pub provider_id: Uuid,
    pub day: u32,
    pub month: u32,
    pub year: i32,
}

/// Input for the hour-by-hour availability of a provider on one day.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ListProviderDayAvailabilityRequest {
    pub provider_id: Uuid,
    pub day: u32,
    pub month: u32,
    pub year: i32,
}

/// Input for the day-by-day availability of a provider in one month.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ListProviderMonthAvailabilityRequest {
    pub provider_id: Uuid,
    pub month: u32,
    pub year: i32,
}
