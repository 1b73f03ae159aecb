//! Serialization of domain types to and from cache bytes.
//!
//! Values are stored as JSON so cached payloads stay readable from
//! `redis-cli` while debugging.

use thiserror::Error;

use crate::appointments::Appointment;
use crate::users::User;

/// Errors that can occur during cache serialization/deserialization.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SerializationError {
    #[error("Failed to serialize: {0}")]
    SerializeFailed(String),
    #[error("Failed to deserialize: {0}")]
    DeserializeFailed(String),
}

/// Result type for serialization operations.
pub type Result<T> = std::result::Result<T, SerializationError>;

/// Serializes an ordered list of appointments to JSON bytes.
pub fn serialize_appointments(appointments: &[Appointment]) -> Result<Vec<u8>> {
    serde_json::to_vec(appointments).map_err(|e| SerializationError::SerializeFailed(e.to_string()))
}

/// Deserializes JSON bytes to a list of appointments, keeping their order.
pub fn deserialize_appointments(bytes: &[u8]) -> Result<Vec<Appointment>> {
    serde_json::from_slice(bytes).map_err(|e| SerializationError::DeserializeFailed(e.to_string()))
}

/// Serializes a list of users to JSON bytes.
///
/// Password hashes are not part of the payload.
pub fn serialize_users(users: &[User]) -> Result<Vec<u8>> {
    serde_json::to_vec(users).map_err(|e| SerializationError::SerializeFailed(e.to_string()))
}

/// Deserializes JSON bytes to a list of users with empty passwords.
pub fn deserialize_users(bytes: &[u8]) -> Result<Vec<User>> {
    serde_json::from_slice(bytes).map_err(|e| SerializationError::DeserializeFailed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};
    use uuid::Uuid;

    fn appointment(hour: u32) -> Appointment {
        let date = NaiveDate::from_ymd_opt(2020, 5, 20)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap();
        Appointment::new(Uuid::new_v4(), Uuid::new_v4(), date)
            .with_created_at(Utc.with_ymd_and_hms(2020, 5, 1, 12, 0, 0).unwrap())
    }

    #[test]
    fn test_appointments_keep_order() {
        let appointments = vec![appointment(15), appointment(9), appointment(12)];

        let bytes = serialize_appointments(&appointments).unwrap();
        let restored = deserialize_appointments(&bytes).unwrap();

        assert_eq!(restored, appointments);
    }

    #[test]
    fn test_empty_appointments() {
        let bytes = serialize_appointments(&[]).unwrap();
        assert_eq!(bytes, b"[]");
        assert!(deserialize_appointments(&bytes).unwrap().is_empty());
    }

    #[test]
    fn test_users_payload_omits_password() {
        let user = User::new("John Doe", "johndoe@example.com", "$argon2id$hash");

        let bytes = serialize_users(std::slice::from_ref(&user)).unwrap();
        let json = String::from_utf8(bytes.clone()).unwrap();
        assert!(!json.contains("argon2id"));
        assert!(!json.contains("password"));

        let restored = deserialize_users(&bytes).unwrap();
        assert_eq!(restored[0].id, user.id);
        assert_eq!(restored[0].email, "johndoe@example.com");
        assert!(restored[0].password.is_empty());
    }

    #[test]
    fn test_malformed_bytes_fail_to_deserialize() {
        let result = deserialize_appointments(b"{not json");
        assert!(matches!(
            result,
            Err(SerializationError::DeserializeFailed(_))
        ));
    }
}
