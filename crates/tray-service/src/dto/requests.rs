//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use serde::Deserialize;
use validator::Validate;

/// Sign-in request creating a new user
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, max = 64, message = "Name must be 1-64 characters"))]
    pub name: String,
}

/// Create room request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateRoomRequest {
    #[validate(length(min = 1, max = 100, message = "Room name must be 1-100 characters"))]
    pub name: String,
}

/// Start a new tray for a room
///
/// The label is optional; a blank label falls back to the "Month Year"
/// default.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateTrayRequest {
    #[validate(length(max = 80, message = "Tray label must be at most 80 characters"))]
    pub label: Option<String>,
}
