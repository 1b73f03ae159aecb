mod error;
mod http_mapping;
mod traits;
mod types;

pub use error::{DateRangeError, RepositoryError, Result};
pub use http_mapping::repository_error_to_status_code;
pub use traits::{AppointmentRepository, UserRepository};
pub use types::{CreateAppointmentData, CreateUserData, DateRange};
