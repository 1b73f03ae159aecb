use chrono::{Datelike, NaiveDate};
use uuid::Uuid;

/// Prefix shared by every provider-appointments key.
pub const PROVIDER_APPOINTMENTS_PREFIX: &str = "provider-appointments";

/// Prefix shared by every providers-list key.
pub const PROVIDERS_LIST_PREFIX: &str = "providers-list";

/// Returns the cache key for a provider's appointments on a single day.
///
/// Month and day are not zero-padded.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use gobarber_core::cache::provider_appointments_key;
/// use uuid::Uuid;
///
/// let day = NaiveDate::from_ymd_opt(2020, 5, 20).unwrap();
/// assert_eq!(
///     provider_appointments_key(Uuid::nil(), day),
///     "provider-appointments:00000000-0000-0000-0000-000000000000:2020-5-20"
/// );
/// ```
pub fn provider_appointments_key(provider_id: Uuid, day: NaiveDate) -> String {
    format!(
        "{}:{}:{}-{}-{}",
        PROVIDER_APPOINTMENTS_PREFIX,
        provider_id,
        day.year(),
        day.month(),
        day.day()
    )
}

/// Returns the cache key for the providers list seen by a user.
pub fn providers_list_key(user_id: Uuid) -> String {
    format!("{}:{}", PROVIDERS_LIST_PREFIX, user_id)
}

/// Returns the glob pattern matching every key under `prefix`.
pub fn prefix_pattern(prefix: &str) -> String {
    format!("{}:*", prefix)
}
