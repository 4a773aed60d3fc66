use crate::model::id::UserId;

pub const MSG_ENROLLED: &str = "Successfully enrolled";
pub const MSG_UNENROLLED: &str = "Successfully unenrolled";
pub const MSG_SELF_ENROLL: &str = "Organizers cannot enroll in their own events.";
pub const MSG_ALREADY_ENROLLED: &str = "Already enrolled";
pub const MSG_EVENT_FULL: &str = "Event full";

/// The slice of an event the enrollment decision needs, read under the
/// same transaction that applies the writes.
#[derive(Debug, Clone, Copy)]
pub struct EventState {
    pub organizer_id: UserId,
    pub enrolled_count: i32,
    pub max_capacity: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnrollDecision {
    Accept,
    Reject(&'static str),
}

/// Pure enrollment rule. Checks run in a fixed order so rejection messages
/// are deterministic: self-enroll, then duplicate, then capacity.
pub fn decide_enroll(
    event: EventState,
    acting_user_id: UserId,
    already_enrolled: bool,
) -> EnrollDecision {
    if event.organizer_id == acting_user_id {
        return EnrollDecision::Reject(MSG_SELF_ENROLL);
    }
    if already_enrolled {
        return EnrollDecision::Reject(MSG_ALREADY_ENROLLED);
    }
    if event.enrolled_count >= event.max_capacity {
        return EnrollDecision::Reject(MSG_EVENT_FULL);
    }
    EnrollDecision::Accept
}

#[cfg(test)]
mod tests {
    use std::collections::{HashMap, HashSet};

    use super::*;
    use crate::model::id::EventId;

    fn state(organizer_id: UserId, enrolled: i32, capacity: i32) -> EventState {
        EventState {
            organizer_id,
            enrolled_count: enrolled,
            max_capacity: capacity,
        }
    }

    #[test]
    fn accepts_a_fresh_attendee_with_room_left() {
        let decision = decide_enroll(state(UserId::new(), 0, 100), UserId::new(), false);
        assert_eq!(decision, EnrollDecision::Accept);
    }

    #[test]
    fn rejects_the_organizer_of_the_event() {
        let organizer = UserId::new();
        let decision = decide_enroll(state(organizer, 0, 100), organizer, false);
        assert_eq!(decision, EnrollDecision::Reject(MSG_SELF_ENROLL));
    }

    #[test]
    fn rejects_a_duplicate_enrollment() {
        let decision = decide_enroll(state(UserId::new(), 1, 100), UserId::new(), true);
        assert_eq!(decision, EnrollDecision::Reject(MSG_ALREADY_ENROLLED));
    }

    #[test]
    fn rejects_when_the_event_is_full() {
        let decision = decide_enroll(state(UserId::new(), 2, 2), UserId::new(), false);
        assert_eq!(decision, EnrollDecision::Reject(MSG_EVENT_FULL));
    }

    #[test]
    fn self_enroll_wins_over_full_for_the_organizer() {
        let organizer = UserId::new();
        let decision = decide_enroll(state(organizer, 5, 5), organizer, false);
        assert_eq!(decision, EnrollDecision::Reject(MSG_SELF_ENROLL));
    }

    // Minimal in-memory rendition of the transactional workflow the adapter
    // runs against Postgres: same policy, same write order, one map per
    // table. Lets the sequential end-to-end properties be checked without a
    // database.
    struct InMemoryEngine {
        events: HashMap<EventId, EventState>,
        attendees: HashSet<(EventId, UserId)>,
        schedule: HashSet<(UserId, EventId)>,
    }

    impl InMemoryEngine {
        fn new() -> Self {
            Self {
                events: HashMap::new(),
                attendees: HashSet::new(),
                schedule: HashSet::new(),
            }
        }

        fn add_event(&mut self, organizer_id: UserId, max_capacity: i32) -> EventId {
            let event_id = EventId::new();
            self.events
                .insert(event_id, state(organizer_id, 0, max_capacity));
            event_id
        }

        fn enroll(&mut self, event_id: EventId, user_id: UserId) -> EnrollDecision {
            let event = *self.events.get(&event_id).expect("event not found");
            let already = self.attendees.contains(&(event_id, user_id));
            let decision = decide_enroll(event, user_id, already);
            if decision == EnrollDecision::Accept {
                self.attendees.insert((event_id, user_id));
                self.events.get_mut(&event_id).unwrap().enrolled_count += 1;
                self.schedule.insert((user_id, event_id));
            }
            decision
        }

        fn unenroll(&mut self, event_id: EventId, user_id: UserId) {
            self.attendees.remove(&(event_id, user_id));
            self.events.get_mut(&event_id).unwrap().enrolled_count -= 1;
            self.schedule.remove(&(user_id, event_id));
        }

        fn is_enrolled(&self, event_id: EventId, user_id: UserId) -> bool {
            self.attendees.contains(&(event_id, user_id))
        }

        fn count(&self, event_id: EventId) -> i32 {
            self.events[&event_id].enrolled_count
        }
    }

    #[test]
    fn enrolling_twice_is_rejected_and_leaves_one_membership() {
        let mut engine = InMemoryEngine::new();
        let event_id = engine.add_event(UserId::new(), 100);
        let attendee = UserId::new();

        assert_eq!(engine.enroll(event_id, attendee), EnrollDecision::Accept);
        assert_eq!(
            engine.enroll(event_id, attendee),
            EnrollDecision::Reject(MSG_ALREADY_ENROLLED)
        );
        assert_eq!(engine.count(event_id), 1);
        assert!(engine.is_enrolled(event_id, attendee));
    }

    #[test]
    fn capacity_is_enforced_sequentially() {
        let mut engine = InMemoryEngine::new();
        let event_id = engine.add_event(UserId::new(), 2);

        assert_eq!(engine.enroll(event_id, UserId::new()), EnrollDecision::Accept);
        assert_eq!(engine.enroll(event_id, UserId::new()), EnrollDecision::Accept);
        assert_eq!(
            engine.enroll(event_id, UserId::new()),
            EnrollDecision::Reject(MSG_EVENT_FULL)
        );
        assert_eq!(engine.count(event_id), 2);
    }

    #[test]
    fn self_enrollment_performs_zero_writes() {
        let mut engine = InMemoryEngine::new();
        let organizer = UserId::new();
        let event_id = engine.add_event(organizer, 100);

        assert_eq!(
            engine.enroll(event_id, organizer),
            EnrollDecision::Reject(MSG_SELF_ENROLL)
        );
        assert!(!engine.is_enrolled(event_id, organizer));
        assert_eq!(engine.count(event_id), 0);
    }

    #[test]
    fn enroll_then_unenroll_restores_the_initial_state() {
        let mut engine = InMemoryEngine::new();
        let event_id = engine.add_event(UserId::new(), 100);
        let attendee = UserId::new();

        engine.enroll(event_id, attendee);
        engine.unenroll(event_id, attendee);

        assert!(!engine.is_enrolled(event_id, attendee));
        assert_eq!(engine.count(event_id), 0);
    }

    #[test]
    fn seat_freed_by_unenroll_can_be_retaken() {
        let mut engine = InMemoryEngine::new();
        let event_id = engine.add_event(UserId::new(), 1);
        let first = UserId::new();
        let second = UserId::new();

        assert_eq!(engine.enroll(event_id, first), EnrollDecision::Accept);
        assert_eq!(
            engine.enroll(event_id, second),
            EnrollDecision::Reject(MSG_EVENT_FULL)
        );
        assert_eq!(engine.count(event_id), 1);

        engine.unenroll(event_id, first);
        assert_eq!(engine.count(event_id), 0);

        assert_eq!(engine.enroll(event_id, second), EnrollDecision::Accept);
        assert_eq!(engine.count(event_id), 1);
    }
}
