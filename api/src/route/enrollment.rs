use axum::{
    routing::{delete, get, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::enrollment::{
    enroll_event, enrollment_status, remove_attendee, show_attendees, show_my_schedule,
    unenroll_event,
};

pub fn build_enrollment_routers() -> Router<AppRegistry> {
    Router::new().route("/me/schedule", get(show_my_schedule))
}

// Merged into the events subtree so the /events prefix is nested once.
pub(super) fn event_scoped_routers() -> Router<AppRegistry> {
    Router::new()
        .route("/:event_id/enrollment", post(enroll_event))
        .route("/:event_id/enrollment", delete(unenroll_event))
        .route("/:event_id/enrollment", get(enrollment_status))
        .route("/:event_id/attendees", get(show_attendees))
        .route("/:event_id/attendees/:attendee_id", delete(remove_attendee))
}
