use chrono::{DateTime, Utc};
use kernel::model::{
    enrollment::{Enrollment, EnrollmentOutcome, ScheduleEntry},
    id::{EventId, UserId},
};
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentOutcomeResponse {
    pub success: bool,
    pub message: String,
}

impl From<EnrollmentOutcome> for EnrollmentOutcomeResponse {
    fn from(value: EnrollmentOutcome) -> Self {
        let EnrollmentOutcome { accepted, message } = value;
        Self {
            success: accepted,
            message,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentStatusResponse {
    pub enrolled: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendeesResponse {
    pub items: Vec<AttendeeResponse>,
}

impl From<Vec<Enrollment>> for AttendeesResponse {
    fn from(value: Vec<Enrollment>) -> Self {
        Self {
            items: value.into_iter().map(AttendeeResponse::from).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendeeResponse {
    pub user_id: UserId,
    pub email: String,
    pub display_name: String,
    pub enrolled_at: DateTime<Utc>,
}

impl From<Enrollment> for AttendeeResponse {
    fn from(value: Enrollment) -> Self {
        let Enrollment {
            event_id: _,
            user_id,
            email,
            display_name,
            enrolled_at,
        } = value;
        Self {
            user_id,
            email,
            display_name,
            enrolled_at,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleResponse {
    pub items: Vec<ScheduleEntryResponse>,
}

impl From<Vec<ScheduleEntry>> for ScheduleResponse {
    fn from(value: Vec<ScheduleEntry>) -> Self {
        Self {
            items: value.into_iter().map(ScheduleEntryResponse::from).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntryResponse {
    pub event_id: EventId,
    pub event_name: String,
    pub enrolled_at: DateTime<Utc>,
}

impl From<ScheduleEntry> for ScheduleEntryResponse {
    fn from(value: ScheduleEntry) -> Self {
        let ScheduleEntry {
            event_id,
            event_name,
            enrolled_at,
        } = value;
        Self {
            event_id,
            event_name,
            enrolled_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::model::enrollment::policy;

    #[test]
    fn outcome_maps_to_the_wire_shape() {
        let outcome = EnrollmentOutcome::rejected(policy::MSG_EVENT_FULL);
        let response = EnrollmentOutcomeResponse::from(outcome);
        assert!(!response.success);
        assert_eq!(response.message, "Event full");
    }

    #[test]
    fn accepted_outcome_keeps_its_message() {
        let outcome = EnrollmentOutcome::accepted(policy::MSG_ENROLLED);
        let response = EnrollmentOutcomeResponse::from(outcome);
        assert!(response.success);
        assert_eq!(response.message, "Successfully enrolled");
    }
}
