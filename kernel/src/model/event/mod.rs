use chrono::{DateTime, Utc};

use crate::model::id::{EventId, UserId};

pub mod event;

pub const DEFAULT_MAX_CAPACITY: i32 = 100;

/// One webinar. `enrolled_count` is denormalized from the attendees table;
/// `0 <= enrolled_count <= max_capacity` holds after every successful
/// enrollment mutation.
#[derive(Debug, Clone)]
pub struct Event {
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
