use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    enrollment::{
        event::{EnrollToEvent, WithdrawFromEvent},
        Enrollment, EnrollmentOutcome, ScheduleEntry,
    },
    id::{EventId, UserId},
};

#[async_trait]
pub trait EnrollmentRepository: Send + Sync {
    /// Runs the guarded enroll workflow. A missing event is an error;
    /// self-enroll, duplicate and full-event cases come back as rejected
    /// outcomes with zero writes performed.
    async fn enroll(&self, event: EnrollToEvent) -> AppResult<EnrollmentOutcome>;

    /// Unconditional withdraw: membership and schedule entry are deleted and
    /// the counter decremented whether or not a matching enrollment existed.
    async fn unenroll(&self, event: WithdrawFromEvent) -> AppResult<EnrollmentOutcome>;

    /// Pure existence check of the membership record.
    async fn is_enrolled(&self, event_id: EventId, user_id: UserId) -> AppResult<bool>;

    /// Roster of an event, in enrollment order.
    async fn find_attendees_by_event_id(&self, event_id: EventId)
        -> AppResult<Vec<Enrollment>>;

    /// The acting user's schedule from the denormalized index, soonest
    /// first. Entries orphaned by event deletion are filtered out here.
    async fn find_schedule_by_user_id(&self, user_id: UserId)
        -> AppResult<Vec<ScheduleEntry>>;
}
