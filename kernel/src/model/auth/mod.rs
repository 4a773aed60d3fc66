use crate::model::id::UserId;

pub mod event;

pub struct AccessToken(pub String);

/// Outcome of a server-side ownership check on an event. Evaluated inside
/// the repository so it cannot be bypassed by a client that skips the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    Granted,
    Denied,
}

impl Permission {
    pub fn for_event_mutation(organizer_id: UserId, acting_user_id: UserId) -> Self {
        if organizer_id == acting_user_id {
            Self::Granted
        } else {
            Self::Denied
        }
    }

    pub fn is_granted(self) -> bool {
        matches!(self, Self::Granted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn organizer_may_mutate_own_event() {
        let organizer = UserId::new();
        assert!(Permission::for_event_mutation(organizer, organizer).is_granted());
    }

    #[test]
    fn other_users_are_denied() {
        let permission = Permission::for_event_mutation(UserId::new(), UserId::new());
        assert_eq!(permission, Permission::Denied);
    }
}
