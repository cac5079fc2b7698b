//! Error handling utilities for repositories

use sqlx::Error as SqlxError;
use tray_core::error::DomainError;
use tray_core::value_objects::Snowflake;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Check for unique violation and return appropriate error or fallback
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Create a "room not found" error
pub fn room_not_found(id: Snowflake) -> DomainError {
    DomainError::RoomNotFound(id)
}

/// Create an "egg not found" error
pub fn egg_not_found(id: Snowflake) -> DomainError {
    DomainError::EggNotFound(id)
}
