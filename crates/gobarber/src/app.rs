use std::time::Duration;

use axum::{
    http::{header, Method, StatusCode},
    routing::{get, patch, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    handlers::{
        appointments::{create_appointment, list_provider_appointments},
        avatar::update_avatar,
        health::livez,
        profile::{show_profile, update_profile},
        providers::{day_availability, list_providers, month_availability},
        sessions::create_session,
        users::create_user,
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    let api_routes = Router::new()
        // User routes
        .route("/users", post(create_user))
        .route("/users/avatar", patch(update_avatar))
        .route("/sessions", post(create_session))
        .route("/profile", get(show_profile).put(update_profile))
        // Provider routes
        .route("/providers", get(list_providers))
        .route(
            "/providers/{id}/month-availability",
            get(month_availability),
        )
        .route("/providers/{id}/day-availability", get(day_availability))
        // Appointment routes
        .route("/appointments", post(create_appointment))
        .route("/appointments/me", get(list_provider_appointments))
        .layer(cors);

    let uploads = ServeDir::new(&state.config.uploads_folder);

    Router::new()
        .route("/livez", get(livez))
        .nest_service("/files", uploads)
        .merge(api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(10),
        ))
        .with_state(state)
}
