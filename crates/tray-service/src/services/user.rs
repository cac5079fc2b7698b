//! User service
//!
//! Handles sign-in (user creation) and user lookup.

use tracing::{info, instrument};

use tray_core::entities::User;

use crate::dto::{CreateUserRequest, UserResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a new user from a display name
    #[instrument(skip(self, request))]
    pub async fn create_user(&self, request: CreateUserRequest) -> ServiceResult<UserResponse> {
        let name = request.name.trim();
        if name.is_empty() {
            return Err(ServiceError::validation("Please enter a name"));
        }

        let user = User::new(self.ctx.generate_id(), name.to_string());
        self.ctx.user_repo().create(&user).await?;

        info!(user_id = %user.id, "User created");

        Ok(UserResponse::from(&user))
    }

    /// Get user by ID
    #[instrument(skip(self))]
    pub async fn get_user(&self, user_id: tray_core::Snowflake) -> ServiceResult<UserResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        Ok(UserResponse::from(&user))
    }
}

#[cfg(test)]
mod tests {
    // Covered by the in-memory service tests in tests/service_tests.rs
}
