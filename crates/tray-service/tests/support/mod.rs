//! In-memory repository implementations for service tests

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use tray_core::entities::{Egg, Room, RoomMember, Tray, User};
use tray_core::error::DomainError;
use tray_core::traits::{
    EggRepository, MemberRepository, RepoResult, RoomRepository, TrayRepository, UserRepository,
};
use tray_core::value_objects::{Snowflake, SnowflakeGenerator};
use tray_service::{ServiceContext, ServiceContextBuilder};

#[derive(Default)]
struct State {
    users: HashMap<i64, User>,
    rooms: HashMap<i64, Room>,
    members: Vec<RoomMember>,
    trays: HashMap<i64, Tray>,
    eggs: HashMap<i64, Egg>,
}

/// One store implementing every repository trait
#[derive(Default)]
pub struct MemRepos {
    state: Mutex<State>,
}

impl MemRepos {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }
}

#[async_trait]
impl UserRepository for MemRepos {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>> {
        Ok(self.state.lock().unwrap().users.get(&id.as_i64()).cloned())
    }

    async fn create(&self, user: &User) -> RepoResult<()> {
        self.state
            .lock()
            .unwrap()
            .users
            .insert(user.id.as_i64(), user.clone());
        Ok(())
    }
}

#[async_trait]
impl RoomRepository for MemRepos {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Room>> {
        Ok(self.state.lock().unwrap().rooms.get(&id.as_i64()).cloned())
    }

    async fn create(&self, room: &Room) -> RepoResult<()> {
        self.state
            .lock()
            .unwrap()
            .rooms
            .insert(room.id.as_i64(), room.clone());
        Ok(())
    }

    async fn set_active_tray(&self, room_id: Snowflake, tray_id: Snowflake) -> RepoResult<()> {
        let mut state = self.state.lock().unwrap();
        let room = state
            .rooms
            .get_mut(&room_id.as_i64())
            .ok_or(DomainError::RoomNotFound(room_id))?;
        room.set_active_tray(tray_id);
        Ok(())
    }

    async fn member_count(&self, room_id: Snowflake) -> RepoResult<i64> {
        let state = self.state.lock().unwrap();
        Ok(state
            .members
            .iter()
            .filter(|m| m.room_id == room_id)
            .count() as i64)
    }
}

#[async_trait]
impl MemberRepository for MemRepos {
    async fn find(
        &self,
        room_id: Snowflake,
        user_id: Snowflake,
    ) -> RepoResult<Option<RoomMember>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .members
            .iter()
            .find(|m| m.room_id == room_id && m.user_id == user_id)
            .cloned())
    }

    async fn find_by_room(&self, room_id: Snowflake) -> RepoResult<Vec<RoomMember>> {
        let state = self.state.lock().unwrap();
        let mut members: Vec<RoomMember> = state
            .members
            .iter()
            .filter(|m| m.room_id == room_id)
            .cloned()
            .collect();
        members.sort_by_key(|m| (m.joined_at, m.user_id));
        Ok(members)
    }

    async fn find_by_user(&self, user_id: Snowflake) -> RepoResult<Vec<RoomMember>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .members
            .iter()
            .filter(|m| m.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn is_member(&self, room_id: Snowflake, user_id: Snowflake) -> RepoResult<bool> {
        Ok(self.find(room_id, user_id).await?.is_some())
    }

    async fn create(&self, member: &RoomMember) -> RepoResult<()> {
        let mut state = self.state.lock().unwrap();
        if state
            .members
            .iter()
            .any(|m| m.room_id == member.room_id && m.user_id == member.user_id)
        {
            return Err(DomainError::AlreadyMember);
        }
        state.members.push(member.clone());
        Ok(())
    }
}

#[async_trait]
impl TrayRepository for MemRepos {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Tray>> {
        Ok(self.state.lock().unwrap().trays.get(&id.as_i64()).cloned())
    }

    async fn create(&self, tray: &Tray) -> RepoResult<()> {
        self.state
            .lock()
            .unwrap()
            .trays
            .insert(tray.id.as_i64(), tray.clone());
        Ok(())
    }
}

#[async_trait]
impl EggRepository for MemRepos {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Egg>> {
        Ok(self.state.lock().unwrap().eggs.get(&id.as_i64()).cloned())
    }

    async fn find_by_tray(&self, tray_id: Snowflake) -> RepoResult<Vec<Egg>> {
        let state = self.state.lock().unwrap();
        let mut eggs: Vec<Egg> = state
            .eggs
            .values()
            .filter(|e| e.tray_id == tray_id)
            .cloned()
            .collect();
        eggs.sort_by_key(|e| e.position);
        Ok(eggs)
    }

    async fn create_batch(&self, eggs: &[Egg]) -> RepoResult<()> {
        let mut state = self.state.lock().unwrap();
        for egg in eggs {
            state.eggs.insert(egg.id.as_i64(), egg.clone());
        }
        Ok(())
    }

    async fn claim(
        &self,
        egg_id: Snowflake,
        user_id: Snowflake,
        at: DateTime<Utc>,
    ) -> RepoResult<bool> {
        let mut state = self.state.lock().unwrap();
        let Some(egg) = state.eggs.get_mut(&egg_id.as_i64()) else {
            return Ok(false);
        };
        if egg.is_claimed() {
            return Ok(false);
        }
        egg.claim(user_id, at);
        Ok(true)
    }

    async fn release(&self, egg_id: Snowflake, user_id: Snowflake) -> RepoResult<bool> {
        let mut state = self.state.lock().unwrap();
        let Some(egg) = state.eggs.get_mut(&egg_id.as_i64()) else {
            return Ok(false);
        };
        if !egg.is_claimed_by(user_id) {
            return Ok(false);
        }
        egg.release();
        Ok(true)
    }
}

/// Build a ServiceContext backed by a fresh in-memory store
pub fn test_context() -> ServiceContext {
    let repos = MemRepos::new();
    ServiceContextBuilder::new()
        .user_repo(repos.clone())
        .room_repo(repos.clone())
        .member_repo(repos.clone())
        .tray_repo(repos.clone())
        .egg_repo(repos)
        .snowflake_generator(Arc::new(SnowflakeGenerator::new(1)))
        .build()
        .expect("test context should build")
}
