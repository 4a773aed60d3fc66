use derive_new::new;

use crate::model::{
    id::{EventId, UserId},
    user::ActingUser,
};

#[derive(new)]
pub struct EnrollToEvent {
    pub event_id: EventId,
    pub acting_user: ActingUser,
}

#[derive(new)]
pub struct WithdrawFromEvent {
    pub event_id: EventId,
    pub attendee_id: UserId,
}
