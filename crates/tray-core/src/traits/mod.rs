//! Repository traits (ports)

mod repositories;

pub use repositories::{
    EggRepository, MemberRepository, RepoResult, RoomRepository, TrayRepository, UserRepository,
};
