use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    event::{
        event::{CreateEvent, DeleteEvent, UpdateEvent},
        Event,
    },
    id::{EventId, UserId},
};

#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn create(&self, event: CreateEvent) -> AppResult<EventId>;
    // Public feed, newest first.
    async fn find_all(&self) -> AppResult<Vec<Event>>;
    async fn find_by_id(&self, event_id: EventId) -> AppResult<Option<Event>>;
    // Organizer dashboard feed, newest first.
    async fn find_by_organizer_id(&self, organizer_id: UserId) -> AppResult<Vec<Event>>;
    async fn update(&self, event: UpdateEvent) -> AppResult<()>;
    // Does not cascade into membership rows or schedule entries; stale
    // schedule entries are filtered lazily when the schedule is read.
    async fn delete(&self, event: DeleteEvent) -> AppResult<()>;
}
