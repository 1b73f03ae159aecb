//! Provider listing and availability handlers.

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use gobarber_core::appointments::{
    DayAvailability, ListProviderDayAvailabilityRequest, ListProviderDayAvailabilityService,
    ListProviderMonthAvailabilityRequest, ListProviderMonthAvailabilityService, MonthAvailability,
};
use gobarber_core::users::ListProvidersService;

use super::{views::UserResponse, ApiError};
use crate::{extractors::CurrentUser, state::AppState};

/// Query parameters for month availability.
#[derive(Debug, Deserialize)]
pub struct MonthQuery {
    pub month: u32,
    pub year: i32,
}

/// Query parameters for day availability.
#[derive(Debug, Deserialize)]
pub struct DayQuery {
    pub day: u32,
    pub month: u32,
    pub year: i32,
}

/// List every provider except the caller (GET /providers).
pub async fn list_providers(
    CurrentUser(user_id): CurrentUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let providers = ListProvidersService::new(state.users.clone(), state.cache.clone())
        .execute(user_id)
        .await?;

    let api_url = &state.config.app_api_url;
    Ok(Json(
        providers
            .into_iter()
            .map(|user| UserResponse::new(user, api_url))
            .collect(),
    ))
}

/// Days of a month with free slots (GET /providers/{id}/month-availability).
pub async fn month_availability(
    _user: CurrentUser,
    State(state): State<AppState>,
    Path(provider_id): Path<Uuid>,
    query: Result<Query<MonthQuery>, QueryRejection>,
) -> Result<Json<Vec<MonthAvailability>>, ApiError> {
    let Query(query) = query.map_err(|e| ApiError::bad_request(e.body_text()))?;

    let availability = ListProviderMonthAvailabilityService::new(state.appointments.clone())
        .execute(ListProviderMonthAvailabilityRequest {
            provider_id,
            month: query.month,
            year: query.year,
        })
        .await?;

    Ok(Json(availability))
}

/// Bookable hours of a day (GET /providers/{id}/day-availability).
pub async fn day_availability(
    _user: CurrentUser,
    State(state): State<AppState>,
    Path(provider_id): Path<Uuid>,
    query: Result<Query<DayQuery>, QueryRejection>,
) -> Result<Json<Vec<DayAvailability>>, ApiError> {
    let Query(query) = query.map_err(|e| ApiError::bad_request(e.body_text()))?;

    let availability = ListProviderDayAvailabilityService::new(state.appointments.clone())
        .execute(ListProviderDayAvailabilityRequest {
            provider_id,
            day: query.day,
            month: query.month,
            year: query.year,
        })
        .await?;

    Ok(Json(availability))
}
