//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::Snowflake;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(Snowflake),

    #[error("Room not found: {0}")]
    RoomNotFound(Snowflake),

    #[error("Tray not found: {0}")]
    TrayNotFound(Snowflake),

    #[error("Egg not found: {0}")]
    EggNotFound(Snowflake),

    #[error("Member not found in room")]
    MemberNotFound,

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Join the room first")]
    NotRoomMember,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Already a member of this room")]
    AlreadyMember,

    #[error("Egg already claimed by someone else")]
    EggAlreadyClaimed,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::RoomNotFound(_) => "UNKNOWN_ROOM",
            Self::TrayNotFound(_) => "UNKNOWN_TRAY",
            Self::EggNotFound(_) => "UNKNOWN_EGG",
            Self::MemberNotFound => "UNKNOWN_MEMBER",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",

            // Authorization
            Self::NotRoomMember => "NOT_ROOM_MEMBER",

            // Conflict
            Self::AlreadyMember => "ALREADY_MEMBER",
            Self::EggAlreadyClaimed => "EGG_ALREADY_CLAIMED",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::RoomNotFound(_)
                | Self::TrayNotFound(_)
                | Self::EggNotFound(_)
                | Self::MemberNotFound
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ValidationError(_))
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::NotRoomMember)
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::AlreadyMember | Self::EggAlreadyClaimed)
    }
}
