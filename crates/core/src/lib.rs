//! Core for the gobarber project.
//!
//! Domain types, repository and provider traits, cache helpers and the
//! use-case services. Concrete storage, cache and provider backends live in
//! the `gobarber` crate and are injected as trait objects.

pub mod appointments;
pub mod cache;
pub mod error;
pub mod providers;
pub mod storage;
pub mod users;

#[cfg(test)]
mod fakes;

pub use error::{AppError, ServiceError, ServiceResult};
