use axum::{
    routing::{delete, get, post, put},
    Router,
};
use registry::AppRegistry;

use crate::handler::event::{
    delete_event, event_stream, register_event, show_event, show_event_list,
    show_organizer_event_list, update_event,
};

pub fn build_event_routers() -> Router<AppRegistry> {
    let events_routers = Router::new()
        .route("/", post(register_event))
        .route("/", get(show_event_list))
        .route("/stream", get(event_stream))
        .route("/mine", get(show_organizer_event_list))
        .route("/:event_id", get(show_event))
        .route("/:event_id", put(update_event))
        .route("/:event_id", delete(delete_event))
        .merge(super::enrollment::event_scoped_routers());

    Router::new().nest("/events", events_routers)
}
