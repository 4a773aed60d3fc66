use kernel::model::{
    event::Event,
    id::{EventId, UserId},
};
use sqlx::types::chrono::{DateTime, Utc};

#[derive(sqlx::FromRow)]
pub struct EventRow {
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

impl From<EventRow> for Event {
    fn from(value: EventRow) -> Self {
        let EventRow {
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
        Event {
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

// Just the columns the enrollment guard reads inside its transaction.
// `name` rides along for the schedule index entry written on acceptance.
#[derive(sqlx::FromRow)]
pub struct EventGuardRow {
    pub name: String,
    pub organizer_id: UserId,
    pub enrolled_count: i32,
    pub max_capacity: i32,
}

impl EventGuardRow {
    pub fn state(&self) -> kernel::model::enrollment::policy::EventState {
        kernel::model::enrollment::policy::EventState {
            organizer_id: self.organizer_id,
            enrolled_count: self.enrolled_count,
            max_capacity: self.max_capacity,
        }
    }
}
