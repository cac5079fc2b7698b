//! Room event hub
//!
//! In-process publish/subscribe layer between the mutations and connected
//! clients. Every room gets a broadcast channel on first subscription;
//! mutations publish into it and the API layer streams the events out over
//! SSE so clients can re-fetch the room summary.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::broadcast;
use tracing::debug;
use tray_core::{RoomEvent, Snowflake};

/// Buffered events per room channel; slow subscribers skip ahead (they
/// re-fetch the summary anyway, so lost events are harmless)
const CHANNEL_CAPACITY: usize = 64;

/// Per-room broadcast hub for [`RoomEvent`]s
#[derive(Clone, Default)]
pub struct RoomEventHub {
    channels: Arc<DashMap<Snowflake, broadcast::Sender<RoomEvent>>>,
}

impl RoomEventHub {
    /// Create a new hub with no subscriptions
    pub fn new() -> Self {
        Self {
            channels: Arc::new(DashMap::new()),
        }
    }

    /// Subscribe to a room's events, creating the channel on first use
    pub fn subscribe(&self, room_id: Snowflake) -> broadcast::Receiver<RoomEvent> {
        self.channels
            .entry(room_id)
            .or_insert_with(|| broadcast::channel(CHANNEL_CAPACITY).0)
            .subscribe()
    }

    /// Publish an event to the room's subscribers
    ///
    /// Returns the number of subscribers that received the event. Rooms
    /// nobody watches have no channel and the event is dropped.
    pub fn publish(&self, event: &RoomEvent) -> usize {
        let room_id = event.room_id();

        let delivered = match self.channels.get(&room_id) {
            Some(sender) => sender.send(event.clone()).unwrap_or(0),
            None => 0,
        };

        if delivered == 0 {
            // Drop channels whose last subscriber disconnected
            self.channels
                .remove_if(&room_id, |_, sender| sender.receiver_count() == 0);
        }

        debug!(room_id = %room_id, event = event.name(), delivered, "Room event published");
        delivered
    }

    /// Number of rooms with a live channel
    pub fn room_count(&self) -> usize {
        self.channels.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_subscriber_receives_published_event() {
        let hub = RoomEventHub::new();
        let room_id = Snowflake::new(1);
        let mut rx = hub.subscribe(room_id);

        let event = RoomEvent::TrayStarted {
            room_id,
            tray_id: Snowflake::new(2),
        };
        assert_eq!(hub.publish(&event), 1);

        let received = rx.recv().await.unwrap();
        assert_eq!(received, event);
    }

    #[tokio::test]
    async fn test_publish_without_subscribers_is_dropped() {
        let hub = RoomEventHub::new();
        let event = RoomEvent::RoomCreated {
            room_id: Snowflake::new(9),
        };
        assert_eq!(hub.publish(&event), 0);
        assert_eq!(hub.room_count(), 0);
    }

    #[tokio::test]
    async fn test_events_are_scoped_per_room() {
        let hub = RoomEventHub::new();
        let mut rx_a = hub.subscribe(Snowflake::new(1));
        let _rx_b = hub.subscribe(Snowflake::new(2));

        hub.publish(&RoomEvent::RoomCreated {
            room_id: Snowflake::new(2),
        });

        // Room 1's subscriber sees nothing
        assert!(rx_a.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_channel_pruned_after_last_subscriber_drops() {
        let hub = RoomEventHub::new();
        let room_id = Snowflake::new(5);
        let rx = hub.subscribe(room_id);
        assert_eq!(hub.room_count(), 1);
        drop(rx);

        hub.publish(&RoomEvent::RoomCreated { room_id });
        assert_eq!(hub.room_count(), 0);
    }
}
