//! Use cases around booking and listing appointments.

mod create_appointment;
mod list_provider_appointments;
mod list_provider_day_availability;
mod list_provider_month_availability;

pub use create_appointment::CreateAppointmentService;
pub use list_provider_appointments::ListProviderAppointmentsService;
pub use list_provider_day_availability::ListProviderDayAvailabilityService;
pub use list_provider_month_availability::ListProviderMonthAvailabilityService;
