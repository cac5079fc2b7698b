//! Room events published when room state changes

mod room_event;

pub use room_event::RoomEvent;
