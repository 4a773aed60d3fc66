use chrono::{DateTime, Utc};
use derive_new::new;
use garde::Validate;
use kernel::model::{
    event::{
        event::{CreateEvent, UpdateEvent},
        Event, DEFAULT_MAX_CAPACITY,
    },
    id::{EventId, UserId},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    #[garde(length(min = 1))]
    pub name: String,
    #[garde(skip)]
    #[serde(default)]
    pub speaker: String,
    #[garde(skip)]
    #[serde(default)]
    pub timing_iso: String,
    #[garde(skip)]
    #[serde(default)]
    pub time_zone: String,
    #[garde(skip)]
    #[serde(default = "default_is_public")]
    pub is_public: bool,
    #[garde(skip)]
    #[serde(default)]
    pub link: String,
    #[garde(skip)]
    #[serde(default)]
    pub description: String,
    #[garde(skip)]
    #[serde(default)]
    pub objectives: String,
    #[garde(skip)]
    #[serde(default)]
    pub topic_relevance: String,
    #[garde(skip)]
    #[serde(default)]
    pub category: String,
    #[garde(range(min = 1))]
    #[serde(default = "default_max_capacity")]
    pub max_capacity: i32,
}

fn default_is_public() -> bool {
    true
}

fn default_max_capacity() -> i32 {
    DEFAULT_MAX_CAPACITY
}

/// Binds the organizer identity from the session to the payload; the
/// client cannot claim a different organizer.
#[derive(new)]
pub struct CreateEventRequestWithOrganizer {
    pub organizer_id: UserId,
    pub organizer_email: String,
    pub request: CreateEventRequest,
}

impl From<CreateEventRequestWithOrganizer> for CreateEvent {
    fn from(value: CreateEventRequestWithOrganizer) -> Self {
        let CreateEventRequestWithOrganizer {
            organizer_id,
            organizer_email,
            request,
        } = value;
        let CreateEventRequest {
            name,
            speaker,
            timing_iso,
            time_zone,
            is_public,
            link,
            description,
            objectives,
            topic_relevance,
            category,
            max_capacity,
        } = request;
        CreateEvent {
            name,
            speaker,
            timing_iso,
            time_zone,
            is_public,
            link,
            description,
            objectives,
            topic_relevance,
            category,
            organizer_id,
            organizer_email,
            max_capacity,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEventRequest {
    #[garde(inner(length(min = 1)))]
    pub name: Option<String>,
    #[garde(skip)]
    pub speaker: Option<String>,
    #[garde(skip)]
    pub timing_iso: Option<String>,
    #[garde(skip)]
    pub time_zone: Option<String>,
    #[garde(skip)]
    pub is_public: Option<bool>,
    #[garde(skip)]
    pub link: Option<String>,
    #[garde(skip)]
    pub description: Option<String>,
    #[garde(skip)]
    pub objectives: Option<String>,
    #[garde(skip)]
    pub topic_relevance: Option<String>,
    #[garde(skip)]
    pub category: Option<String>,
    #[garde(inner(range(min = 1)))]
    pub max_capacity: Option<i32>,
}

#[derive(new)]
pub struct UpdateEventRequestWithIds(EventId, UserId, UpdateEventRequest);

impl From<UpdateEventRequestWithIds> for UpdateEvent {
    fn from(value: UpdateEventRequestWithIds) -> Self {
        let UpdateEventRequestWithIds(event_id, requested_user, request) = value;
        let UpdateEventRequest {
            name,
            speaker,
            timing_iso,
            time_zone,
            is_public,
            link,
            description,
            objectives,
            topic_relevance,
            category,
            max_capacity,
        } = request;
        UpdateEvent {
            event_id,
            requested_user,
            name,
            speaker,
            timing_iso,
            time_zone,
            is_public,
            link,
            description,
            objectives,
            topic_relevance,
            category,
            max_capacity,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventsResponse {
    pub items: Vec<EventResponse>,
}

impl From<Vec<Event>> for EventsResponse {
    fn from(value: Vec<Event>) -> Self {
        Self {
            items: value.into_iter().map(EventResponse::from).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventResponse {
    pub event_id: EventId,
    pub name: String,
    pub speaker: String,
    pub timing_iso: String,
    pub time_zone: String,
    pub is_public: bool,
    pub link: String,
    pub description: String,
    pub objectives: String,
    pub topic_relevance: String,
    pub category: String,
    pub organizer_id: UserId,
    pub organizer_email: String,
    pub created_at: DateTime<Utc>,
    pub max_capacity: i32,
    pub enrolled_count: i32,
}

impl From<Event> for EventResponse {
    fn from(value: Event) -> Self {
        let Event {
            event_id,
            name,
            speaker,
            timing_iso,
            time_zone,
            is_public,
            link,
            description,
            objectives,
            topic_relevance,
            category,
            organizer_id,
            organizer_email,
            created_at,
            max_capacity,
            enrolled_count,
        } = value;
        Self {
            event_id,
            name,
            speaker,
            timing_iso,
            time_zone,
            is_public,
            link,
            description,
            objectives,
            topic_relevance,
            category,
            organizer_id,
            organizer_email,
            created_at,
            max_capacity,
            enrolled_count,
        }
    }
}
