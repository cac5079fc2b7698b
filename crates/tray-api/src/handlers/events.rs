//! Room event stream handler
//!
//! Streams room events over SSE. Clients subscribe to the rooms they are
//! viewing and re-fetch the room summary whenever an event arrives, which
//! stands in for the push-based query invalidation of a reactive store.

use std::convert::Infallible;

use axum::{
    extract::{Path, State},
    response::sse::{Event, KeepAlive, Sse},
};
use futures_util::stream::Stream;
use tokio::sync::broadcast;
use tray_core::DomainError;
use tray_service::ServiceError;

use crate::extractors::CurrentUser;
use crate::response::{ApiError, ApiResult};
use crate::state::AppState;

/// Subscribe to a room's event stream
///
/// GET /rooms/{room_id}/events
pub async fn room_events(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(room_id): Path<String>,
) -> ApiResult<Sse<impl Stream<Item = Result<Event, Infallible>>>> {
    let room_id: tray_core::Snowflake = room_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid room_id format"))?;

    let ctx = state.service_context();

    ctx.room_repo()
        .find_by_id(room_id)
        .await?
        .ok_or_else(|| ApiError::Service(ServiceError::not_found("Room", room_id.to_string())))?;

    if !ctx.member_repo().is_member(room_id, current.user_id).await? {
        return Err(DomainError::NotRoomMember.into());
    }

    let rx = ctx.events().subscribe(room_id);
    let stream = futures_util::stream::unfold(rx, |mut rx| async move {
        loop {
            match rx.recv().await {
                Ok(event) => {
                    // Serializing a RoomEvent cannot realistically fail; skip
                    // the event rather than kill the stream if it ever does
                    if let Ok(sse) = Event::default().event(event.name()).json_data(&event) {
                        return Some((Ok::<_, Infallible>(sse), rx));
                    }
                }
                // Fell behind the broadcast buffer; clients re-fetch the
                // summary on every event, so skipping ahead is fine
                Err(broadcast::error::RecvError::Lagged(_)) => {}
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    });

    Ok(Sse::new(stream).keep_alive(KeepAlive::default()))
}
