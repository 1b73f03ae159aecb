pub mod operations;
mod requests;
pub mod services;
mod types;

pub use operations::{local_now, Clock, BOOKABLE_HOURS};
pub use requests::{
    CreateAppointmentRequest, ListProviderAppointmentsRequest, ListProviderDayAvailabilityRequest,
    ListProviderMonthAvailabilityRequest,
};
pub use services::{
    CreateAppointmentService, ListProviderAppointmentsService,
    ListProviderDayAvailabilityService, ListProviderMonthAvailabilityService,
};
pub use types::{Appointment, DayAvailability, MonthAvailability};
