mod error;
mod keys;
mod patterns;
mod serialization;
mod traits;

pub use error::{CacheError, Result};
pub use keys::{
    prefix_pattern, provider_appointments_key, providers_list_key, PROVIDERS_LIST_PREFIX,
    PROVIDER_APPOINTMENTS_PREFIX,
};
pub use patterns::pattern_matches;
pub use serialization::{
    deserialize_appointments, deserialize_users, serialize_appointments, serialize_users,
    SerializationError,
};
pub use traits::CacheProvider;
