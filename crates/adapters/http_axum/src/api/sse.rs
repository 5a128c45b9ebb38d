//! Server-Sent Events (SSE) stream for real-time updates.

use axum::extract::State;
use axum::response::sse::{Event, KeepAlive, Sse};
use tokio_stream::StreamExt;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::wrappers::errors::BroadcastStreamRecvError;

use crate::state::{AppState, Backend};

/// `GET /api/events/stream`: SSE stream of domain events.
///
/// Each event is sent as a JSON `data:` frame, named after its event type so
/// browsers can listen selectively. The stream ends when the client
/// disconnects or the event bus is dropped.
pub async fn stream<B: Backend>(
    State(state): State<AppState<B>>,
) -> Sse<impl tokio_stream::Stream<Item = Result<Event, std::convert::Infallible>>> {
    let event_rx = state.event_bus.subscribe();
    let event_stream = BroadcastStream::new(event_rx).filter_map(|result| match result {
        Ok(event) => match serde_json::to_string(&event) {
            Ok(json) => Some(Ok(Event::default()
                .event(event.event_type.as_str())
                .data(json))),
            Err(err) => {
                tracing::warn!(%err, "failed to serialize event for SSE stream");
                None
            }
        },
        Err(BroadcastStreamRecvError::Lagged(n)) => {
            tracing::warn!(skipped = n, "SSE subscriber lagged, events were dropped");
            None
        }
    });

    Sse::new(event_stream).keep_alive(KeepAlive::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::seeded_state;
    use ecosmart_domain::event::EventType;
    use ecosmart_domain::id::{DeviceId, ZoneId};

    #[tokio::test]
    async fn should_subscribe_to_event_bus_when_stream_created() {
        let state = seeded_state(None);
        let bus = std::sync::Arc::clone(&state.event_bus);
        let before = bus.subscriber_count();

        let _sse = stream(State(state.clone())).await;
        assert_eq!(bus.subscriber_count(), before + 1);
    }

    #[tokio::test]
    async fn should_broadcast_service_events() {
        let state = seeded_state(None);
        let mut rx = state.event_bus.subscribe();

        state
            .zone_service
            .toggle_light(&ZoneId::new("zone-lr"), &DeviceId::new("l-lr-tv"))
            .await
            .unwrap();

        let first = rx.recv().await.unwrap();
        assert_eq!(first.event_type, EventType::PowerUsageChanged);
        let second = rx.recv().await.unwrap();
        assert_eq!(second.event_type, EventType::LightToggled);
        assert_eq!(second.zone_id, Some(ZoneId::new("zone-lr")));
    }
}
