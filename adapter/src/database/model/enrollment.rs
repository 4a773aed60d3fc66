use kernel::model::{
    enrollment::{Enrollment, ScheduleEntry},
    id::{EventId, UserId},
};
use sqlx::types::chrono::{DateTime, Utc};

#[derive(sqlx::FromRow)]
pub struct AttendeeRow {
    pub event_id: EventId,
    pub user_id: UserId,
    pub email: String,
    pub display_name: String,
    pub enrolled_at: DateTime<Utc>,
}

impl From<AttendeeRow> for Enrollment {
    fn from(value: AttendeeRow) -> Self {
        let AttendeeRow {
            event_id,
            user_id,
            email,
            display_name,
            enrolled_at,
        } = value;
        Enrollment {
            event_id,
            user_id,
            email,
            display_name,
            enrolled_at,
        }
    }
}

#[derive(sqlx::FromRow)]
pub struct ScheduleEntryRow {
    pub event_id: EventId,
    pub event_name: String,
    pub enrolled_at: DateTime<Utc>,
}

impl From<ScheduleEntryRow> for ScheduleEntry {
    fn from(value: ScheduleEntryRow) -> Self {
        let ScheduleEntryRow {
            event_id,
            event_name,
            enrolled_at,
        } = value;
        ScheduleEntry {
            event_id,
            event_name,
            enrolled_at,
        }
    }
}
