//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::entities::{Egg, Room, RoomMember, Tray, User};
use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>>;

    /// Create a new user
    async fn create(&self, user: &User) -> RepoResult<()>;
}

// ============================================================================
// Room Repository
// ============================================================================

#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// Find room by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Room>>;

    /// Create a new room
    async fn create(&self, room: &Room) -> RepoResult<()>;

    /// Point the room at a new active tray, retiring the previous one
    async fn set_active_tray(&self, room_id: Snowflake, tray_id: Snowflake) -> RepoResult<()>;

    /// Get member count for a room
    async fn member_count(&self, room_id: Snowflake) -> RepoResult<i64>;
}

// ============================================================================
// Member Repository
// ============================================================================

#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// Find membership by room and user ID
    async fn find(&self, room_id: Snowflake, user_id: Snowflake)
        -> RepoResult<Option<RoomMember>>;

    /// List all members of a room, ordered by join time
    async fn find_by_room(&self, room_id: Snowflake) -> RepoResult<Vec<RoomMember>>;

    /// List all memberships of a user
    async fn find_by_user(&self, user_id: Snowflake) -> RepoResult<Vec<RoomMember>>;

    /// Check if user is a member of the room
    async fn is_member(&self, room_id: Snowflake, user_id: Snowflake) -> RepoResult<bool>;

    /// Add member to room
    async fn create(&self, member: &RoomMember) -> RepoResult<()>;
}

// ============================================================================
// Tray Repository
// ============================================================================

#[async_trait]
pub trait TrayRepository: Send + Sync {
    /// Find tray by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Tray>>;

    /// Create a new tray
    async fn create(&self, tray: &Tray) -> RepoResult<()>;
}

// ============================================================================
// Egg Repository
// ============================================================================

#[async_trait]
pub trait EggRepository: Send + Sync {
    /// Find egg by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Egg>>;

    /// List all eggs of a tray, ordered by position
    async fn find_by_tray(&self, tray_id: Snowflake) -> RepoResult<Vec<Egg>>;

    /// Insert a batch of eggs (the 30 slots of a freshly started tray)
    async fn create_batch(&self, eggs: &[Egg]) -> RepoResult<()>;

    /// Claim an unclaimed egg for a user.
    ///
    /// Returns `false` when the egg was already claimed at the time of the
    /// write; the caller decides whether that is a conflict. The write is a
    /// single conditional update so concurrent claimers cannot both win.
    async fn claim(
        &self,
        egg_id: Snowflake,
        user_id: Snowflake,
        at: DateTime<Utc>,
    ) -> RepoResult<bool>;

    /// Release an egg currently claimed by `user_id`.
    ///
    /// Returns `false` when the claim no longer matches (taken over or
    /// already released concurrently).
    async fn release(&self, egg_id: Snowflake, user_id: Snowflake) -> RepoResult<bool>;
}
