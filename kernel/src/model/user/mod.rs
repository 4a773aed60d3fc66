use crate::model::{id::UserId, role::Role};

pub mod event;

#[derive(Debug, PartialEq, Eq)]
pub struct User {
    pub user_id: UserId,
    pub user_name: String,
    pub email: String,
    pub role: Role,
}

/// The authenticated actor an operation runs on behalf of.
#[derive(Debug, Clone)]
pub struct ActingUser {
    pub user_id: UserId,
    pub email: String,
    pub display_name: Option<String>,
}

impl ActingUser {
    /// Membership records always carry a printable name.
    pub fn display_name_or_anonymous(&self) -> String {
        self.display_name
            .clone()
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| "Anonymous".into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn acting_user(display_name: Option<&str>) -> ActingUser {
        ActingUser {
            user_id: UserId::new(),
            email: "attendee@example.com".into(),
            display_name: display_name.map(String::from),
        }
    }

    #[test]
    fn display_name_falls_back_to_anonymous() {
        assert_eq!(acting_user(None).display_name_or_anonymous(), "Anonymous");
        assert_eq!(acting_user(Some("")).display_name_or_anonymous(), "Anonymous");
        assert_eq!(acting_user(Some("Rina")).display_name_or_anonymous(), "Rina");
    }
}
