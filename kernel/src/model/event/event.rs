use derive_new::new;

use crate::model::id::{EventId, UserId};

#[derive(new)]
pub struct CreateEvent {
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
    pub max_capacity: i32,
}

#[derive(Debug)]
pub struct UpdateEvent {
    pub event_id: EventId,
    pub requested_user: UserId,
    pub name: Option<String>,
    pub speaker: Option<String>,
    pub timing_iso: Option<String>,
    pub time_zone: Option<String>,
    pub is_public: Option<bool>,
    pub link: Option<String>,
    pub description: Option<String>,
    pub objectives: Option<String>,
    pub topic_relevance: Option<String>,
    pub category: Option<String>,
    pub max_capacity: Option<i32>,
}

#[derive(Debug)]
pub struct DeleteEvent {
    pub event_id: EventId,
    pub requested_user: UserId,
}
