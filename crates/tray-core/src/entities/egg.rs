//! Egg entity - one positional slot in a tray

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Egg entity
///
/// One of the 30 slots of a tray, claimable by exactly one room member at a
/// time. Eggs are created unclaimed and never deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Egg {
    pub id: Snowflake,
    pub tray_id: Snowflake,
    pub position: i32,
    pub eaten_by: Option<Snowflake>,
    pub eaten_at: Option<DateTime<Utc>>,
}

impl Egg {
    /// Create a new unclaimed Egg at the given position
    pub fn new(id: Snowflake, tray_id: Snowflake, position: i32) -> Self {
        Self {
            id,
            tray_id,
            position,
            eaten_by: None,
            eaten_at: None,
        }
    }

    /// Check whether anyone has claimed this egg
    #[inline]
    pub fn is_claimed(&self) -> bool {
        self.eaten_by.is_some()
    }

    /// Check whether a specific user holds the claim
    #[inline]
    pub fn is_claimed_by(&self, user_id: Snowflake) -> bool {
        self.eaten_by == Some(user_id)
    }

    /// Claim the egg for a user at the given time
    pub fn claim(&mut self, user_id: Snowflake, at: DateTime<Utc>) {
        self.eaten_by = Some(user_id);
        self.eaten_at = Some(at);
    }

    /// Release the claim, returning the egg to the unclaimed state
    pub fn release(&mut self) {
        self.eaten_by = None;
        self.eaten_at = None;
    }
}
