use std::convert::Infallible;

use adapter::feed::{EventChange, EventChangeKind};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::sse::{Event as SseEvent, KeepAlive, Sse},
    Json,
};
use garde::Validate;
use kernel::model::{event::event::DeleteEvent, id::EventId};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};
use tokio_stream::{wrappers::BroadcastStream, Stream, StreamExt};

use crate::{
    extractor::AuthorizedUser,
    model::event::{
        CreateEventRequest, CreateEventRequestWithOrganizer, EventResponse, EventsResponse,
        UpdateEventRequest, UpdateEventRequestWithIds,
    },
};

pub async fn register_event(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateEventRequest>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    req.validate(&())?;

    let create_event = CreateEventRequestWithOrganizer::new(
        user.id(),
        user.user.email.clone(),
        req,
    );
    let event_id = registry
        .event_repository()
        .create(create_event.into())
        .await?;

    registry.event_feed().publish(EventChange {
        event_id,
        kind: EventChangeKind::Created,
    });

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "eventId": event_id })),
    ))
}

pub async fn show_event_list(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<EventsResponse>> {
    registry
        .event_repository()
        .find_all()
        .await
        .map(EventsResponse::from)
        .map(Json)
}

pub async fn show_event(
    Path(event_id): Path<EventId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<EventResponse>> {
    registry
        .event_repository()
        .find_by_id(event_id)
        .await
        .and_then(|event| match event {
            Some(event) => Ok(Json(event.into())),
            None => Err(AppError::EntityNotFound(format!(
                "event ({event_id}) not found"
            ))),
        })
}

pub async fn show_organizer_event_list(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<EventsResponse>> {
    registry
        .event_repository()
        .find_by_organizer_id(user.id())
        .await
        .map(EventsResponse::from)
        .map(Json)
}

pub async fn update_event(
    user: AuthorizedUser,
    Path(event_id): Path<EventId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpdateEventRequest>,
) -> AppResult<StatusCode> {
    req.validate(&())?;

    let update_event = UpdateEventRequestWithIds::new(event_id, user.id(), req);
    registry
        .event_repository()
        .update(update_event.into())
        .await?;

    registry.event_feed().publish(EventChange {
        event_id,
        kind: EventChangeKind::Updated,
    });

    Ok(StatusCode::OK)
}

pub async fn delete_event(
    user: AuthorizedUser,
    Path(event_id): Path<EventId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    let delete_event = DeleteEvent {
        event_id,
        requested_user: user.id(),
    };
    registry.event_repository().delete(delete_event).await?;

    registry.event_feed().publish(EventChange {
        event_id,
        kind: EventChangeKind::Deleted,
    });

    Ok(StatusCode::OK)
}

/// Live change feed as server-sent events. The broadcast receiver is torn
/// down when the client disconnects and the stream is dropped.
pub async fn event_stream(
    State(registry): State<AppRegistry>,
) -> Sse<impl Stream<Item = Result<SseEvent, Infallible>>> {
    let rx = registry.event_feed().subscribe().into_inner();
    let stream = BroadcastStream::new(rx).filter_map(|change| {
        change
            .ok()
            .and_then(|change| SseEvent::default().json_data(change).ok())
            .map(Ok)
    });
    Sse::new(stream).keep_alive(KeepAlive::default())
}
