//! Capability providers injected into the services: password hashing and
//! file storage.

mod error;
mod traits;

pub use error::{ProviderError, Result};
pub use traits::{HashProvider, StorageProvider};
