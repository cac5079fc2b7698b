//! Service context - dependency container for services
//!
//! Holds the repositories, ID generator, and room event hub shared by all
//! services.

use std::sync::Arc;

use tray_core::traits::{
    EggRepository, MemberRepository, RoomRepository, TrayRepository, UserRepository,
};
use tray_core::{Snowflake, SnowflakeGenerator};

use super::events::RoomEventHub;

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Repositories for the five record types
/// - Snowflake generator for ID generation
/// - The room event hub for publishing mutations to subscribers
#[derive(Clone)]
pub struct ServiceContext {
    user_repo: Arc<dyn UserRepository>,
    room_repo: Arc<dyn RoomRepository>,
    member_repo: Arc<dyn MemberRepository>,
    tray_repo: Arc<dyn TrayRepository>,
    egg_repo: Arc<dyn EggRepository>,

    snowflake_generator: Arc<SnowflakeGenerator>,
    events: RoomEventHub,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        room_repo: Arc<dyn RoomRepository>,
        member_repo: Arc<dyn MemberRepository>,
        tray_repo: Arc<dyn TrayRepository>,
        egg_repo: Arc<dyn EggRepository>,
        snowflake_generator: Arc<SnowflakeGenerator>,
    ) -> Self {
        Self {
            user_repo,
            room_repo,
            member_repo,
            tray_repo,
            egg_repo,
            snowflake_generator,
            events: RoomEventHub::new(),
        }
    }

    // === Repositories ===

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the room repository
    pub fn room_repo(&self) -> &dyn RoomRepository {
        self.room_repo.as_ref()
    }

    /// Get the member repository
    pub fn member_repo(&self) -> &dyn MemberRepository {
        self.member_repo.as_ref()
    }

    /// Get the tray repository
    pub fn tray_repo(&self) -> &dyn TrayRepository {
        self.tray_repo.as_ref()
    }

    /// Get the egg repository
    pub fn egg_repo(&self) -> &dyn EggRepository {
        self.egg_repo.as_ref()
    }

    // === Events ===

    /// Get the room event hub
    pub fn events(&self) -> &RoomEventHub {
        &self.events
    }

    // === Services ===

    /// Get the snowflake ID generator
    pub fn snowflake_generator(&self) -> &SnowflakeGenerator {
        self.snowflake_generator.as_ref()
    }

    /// Generate a new Snowflake ID
    pub fn generate_id(&self) -> Snowflake {
        self.snowflake_generator.generate()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("events", &"RoomEventHub")
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    user_repo: Option<Arc<dyn UserRepository>>,
    room_repo: Option<Arc<dyn RoomRepository>>,
    member_repo: Option<Arc<dyn MemberRepository>>,
    tray_repo: Option<Arc<dyn TrayRepository>>,
    egg_repo: Option<Arc<dyn EggRepository>>,
    snowflake_generator: Option<Arc<SnowflakeGenerator>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn room_repo(mut self, repo: Arc<dyn RoomRepository>) -> Self {
        self.room_repo = Some(repo);
        self
    }

    pub fn member_repo(mut self, repo: Arc<dyn MemberRepository>) -> Self {
        self.member_repo = Some(repo);
        self
    }

    pub fn tray_repo(mut self, repo: Arc<dyn TrayRepository>) -> Self {
        self.tray_repo = Some(repo);
        self
    }

    pub fn egg_repo(mut self, repo: Arc<dyn EggRepository>) -> Self {
        self.egg_repo = Some(repo);
        self
    }

    pub fn snowflake_generator(mut self, generator: Arc<SnowflakeGenerator>) -> Self {
        self.snowflake_generator = Some(generator);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        use super::error::ServiceError;

        Ok(ServiceContext::new(
            self.user_repo
                .ok_or_else(|| ServiceError::validation("user_repo is required"))?,
            self.room_repo
                .ok_or_else(|| ServiceError::validation("room_repo is required"))?,
            self.member_repo
                .ok_or_else(|| ServiceError::validation("member_repo is required"))?,
            self.tray_repo
                .ok_or_else(|| ServiceError::validation("tray_repo is required"))?,
            self.egg_repo
                .ok_or_else(|| ServiceError::validation("egg_repo is required"))?,
            self.snowflake_generator
                .ok_or_else(|| ServiceError::validation("snowflake_generator is required"))?,
        ))
    }
}
