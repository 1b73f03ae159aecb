//! SQLite schema definitions and SQL query constants.
//!
//! Appointment dates are stored as `YYYY-MM-DD HH:MM:SS` text so that
//! string comparison orders them chronologically.

/// SQL statement to create all tables.
pub const CREATE_TABLES: &str = r#"
-- Users table
CREATE TABLE IF NOT EXISTS users (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    email TEXT NOT NULL UNIQUE,
    password TEXT NOT NULL,
    avatar TEXT,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

-- Appointments table
CREATE TABLE IF NOT EXISTS appointments (
    id TEXT PRIMARY KEY,
    provider_id TEXT NOT NULL,
    user_id TEXT NOT NULL,
    date TEXT NOT NULL,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL,
    FOREIGN KEY (provider_id) REFERENCES users(id) ON DELETE CASCADE,
    FOREIGN KEY (user_id) REFERENCES users(id) ON DELETE CASCADE
);

-- Indexes for efficient queries
CREATE INDEX IF NOT EXISTS idx_appointments_provider_date ON appointments(provider_id, date);
CREATE INDEX IF NOT EXISTS idx_users_email ON users(email);
"#;

// User queries
pub const INSERT_USER: &str = r#"
INSERT INTO users (id, name, email, password, avatar, created_at, updated_at)
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
"#;

pub const SELECT_USER_BY_ID: &str = r#"
SELECT id, name, email, password, avatar, created_at, updated_at
FROM users
WHERE id = ?1
"#;

pub const SELECT_USER_BY_EMAIL: &str = r#"
SELECT id, name, email, password, avatar, created_at, updated_at
FROM users
WHERE email = ?1
"#;

pub const SELECT_PROVIDERS: &str = r#"
SELECT id, name, email, password, avatar, created_at, updated_at
FROM users
ORDER BY name ASC, created_at ASC
"#;

pub const SELECT_PROVIDERS_EXCEPT: &str = r#"
SELECT id, name, email, password, avatar, created_at, updated_at
FROM users
WHERE id <> ?1
ORDER BY name ASC, created_at ASC
"#;

pub const UPDATE_USER: &str = r#"
UPDATE users
SET name = ?2, email = ?3, password = ?4, avatar = ?5, updated_at = ?6
WHERE id = ?1
"#;

// Appointment queries
pub const INSERT_APPOINTMENT: &str = r#"
INSERT INTO appointments (id, provider_id, user_id, date, created_at, updated_at)
VALUES (?1, ?2, ?3, ?4, ?5, ?6)
"#;

pub const SELECT_APPOINTMENT_BY_DATE: &str = r#"
SELECT id, provider_id, user_id, date, created_at, updated_at
FROM appointments
WHERE provider_id = ?1 AND date = ?2
"#;

/// Half-open range: `?2 <= date < ?3`.
pub const SELECT_APPOINTMENTS_BY_PROVIDER_AND_RANGE: &str = r#"
SELECT id, provider_id, user_id, date, created_at, updated_at
FROM appointments
WHERE provider_id = ?1 AND date >= ?2 AND date <= ?3
ORDER BY date ASC
"#;
