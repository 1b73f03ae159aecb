pub mod appointments;
pub mod avatar;
pub mod error;
pub mod health;
pub mod profile;
pub mod providers;
pub mod sessions;
pub mod users;
pub mod views;

pub use error::ApiError;
