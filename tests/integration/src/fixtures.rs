//! Request and response fixtures for the API tests

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Create-user request body
#[derive(Debug, Clone, Serialize)]
pub struct CreateUserBody {
    pub name: String,
}

impl CreateUserBody {
    /// A unique user name per test run
    pub fn unique(prefix: &str) -> Self {
        Self {
            name: format!("{prefix}-{}", uuid::Uuid::new_v4().simple()),
        }
    }
}

/// Create-room request body
#[derive(Debug, Clone, Serialize)]
pub struct CreateRoomBody {
    pub name: String,
}

/// Create-tray request body
#[derive(Debug, Clone, Serialize)]
pub struct CreateTrayBody {
    pub label: Option<String>,
}

/// User response subset
#[derive(Debug, Clone, Deserialize)]
pub struct UserBody {
    pub id: String,
    pub name: String,
}

/// Room response subset
#[derive(Debug, Clone, Deserialize)]
pub struct RoomBody {
    pub id: String,
    pub name: String,
    pub active_tray_id: Option<String>,
}

/// Room list entry
#[derive(Debug, Clone, Deserialize)]
pub struct RoomListEntryBody {
    pub id: String,
    pub member_count: i64,
}

/// Join response
#[derive(Debug, Clone, Deserialize)]
pub struct JoinBody {
    pub joined: bool,
}

/// Toggle response
#[derive(Debug, Clone, Deserialize)]
pub struct ToggleBody {
    pub claimed: bool,
}

/// Tray response subset
#[derive(Debug, Clone, Deserialize)]
pub struct TrayBody {
    pub id: String,
    pub label: String,
}

/// Egg within the summary
#[derive(Debug, Clone, Deserialize)]
pub struct EggBody {
    pub id: String,
    pub position: i32,
    #[serde(default)]
    pub eaten_by: Option<String>,
}

/// Member within the summary
#[derive(Debug, Clone, Deserialize)]
pub struct MemberBody {
    pub user_id: String,
    pub name: String,
}

/// Room summary response
#[derive(Debug, Clone, Deserialize)]
pub struct SummaryBody {
    pub room: RoomBody,
    pub is_member: bool,
    pub members: Vec<MemberBody>,
    pub tray: Option<TrayBody>,
    pub eggs: Vec<EggBody>,
    pub counts: HashMap<String, i64>,
    pub target_per_member: usize,
}

/// Error response body
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}
