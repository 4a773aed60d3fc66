use chrono::{DateTime, Utc};

use crate::model::id::{EventId, UserId};

pub mod event;
pub mod policy;

/// Membership record: proof that one attendee is enrolled in one event.
/// Keyed by (event id, user id); existence of the record is the sole
/// source of truth for "is enrolled".
#[derive(Debug, Clone)]
pub struct Enrollment {
    pub event_id: EventId,
    pub user_id: UserId,
    pub email: String,
    pub display_name: String,
    pub enrolled_at: DateTime<Utc>,
}

/// Denormalized reverse pointer letting an attendee list their own schedule
/// without scanning across all events. Created and deleted in lockstep with
/// the membership record; the membership record wins if they ever diverge.
#[derive(Debug, Clone)]
pub struct ScheduleEntry {
    pub event_id: EventId,
    pub event_name: String,
    pub enrolled_at: DateTime<Utc>,
}

/// A business-rule result. A rejected outcome means the request was
/// understood and declined; infrastructure failures are `Err(AppError)`
/// instead and never take this shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrollmentOutcome {
    pub accepted: bool,
    pub message: String,
}

impl EnrollmentOutcome {
    pub fn accepted(message: impl Into<String>) -> Self {
        Self {
            accepted: true,
            message: message.into(),
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            accepted: false,
            message: message.into(),
        }
    }
}
