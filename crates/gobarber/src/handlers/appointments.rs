//! Appointment handlers.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    Json,
};
use chrono::NaiveDateTime;
use serde::Deserialize;
use uuid::Uuid;

use gobarber_core::appointments::{
    Appointment, CreateAppointmentRequest, CreateAppointmentService,
    ListProviderAppointmentsRequest, ListProviderAppointmentsService,
};

use super::{providers::DayQuery, ApiError};
use crate::{extractors::CurrentUser, state::AppState};

/// Body of `POST /appointments`.
#[derive(Debug, Deserialize)]
pub struct CreateAppointmentBody {
    pub provider_id: Uuid,
    pub date: NaiveDateTime,
}

/// Book an appointment with a provider (POST /appointments).
pub async fn create_appointment(
    CurrentUser(user_id): CurrentUser,
    State(state): State<AppState>,
    payload: Result<Json<CreateAppointmentBody>, JsonRejection>,
) -> Result<(StatusCode, Json<Appointment>), ApiError> {
    let Json(body) = payload.map_err(|e| ApiError::bad_request(e.body_text()))?;

    let appointment =
        CreateAppointmentService::new(state.appointments.clone(), state.cache.clone())
            .execute(CreateAppointmentRequest {
                provider_id: body.provider_id,
                user_id,
                date: body.date,
            })
            .await?;

    Ok((StatusCode::CREATED, Json(appointment)))
}

/// The caller's appointments as a provider on one day (GET /appointments/me).
pub async fn list_provider_appointments(
    CurrentUser(provider_id): CurrentUser,
    State(state): State<AppState>,
    query: Result<Query<DayQuery>, QueryRejection>,
) -> Result<Json<Vec<Appointment>>, ApiError> {
    let Query(query) = query.map_err(|e| ApiError::bad_request(e.body_text()))?;

    let appointments =
        ListProviderAppointmentsService::new(state.appointments.clone(), state.cache.clone())
            .execute(ListProviderAppointmentsRequest {
                provider_id,
                day: query.day,
                month: query.month,
                year: query.year,
            })
            .await?;

    Ok(Json(appointments))
}
