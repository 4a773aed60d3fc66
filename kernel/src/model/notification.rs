use std::collections::HashMap;

use crate::model::{event::Event, user::ActingUser};

/// Template keys mirror the transactional-mail dashboard configuration.
/// `EventCreated` and `EventDeleted` exist but typically have no template
/// configured; the dispatcher skips those silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKey {
    EventCreated,
    EventDeleted,
    Enrolled,
    Unenrolled,
}

/// A single outbound mail the workflow asks to be sent. Built by handlers
/// after the core operation has committed and consumed by the dispatcher,
/// so the workflow itself stays free of mail-provider concerns.
#[derive(Debug, Clone)]
pub struct Notification {
    pub template: TemplateKey,
    pub recipient_name: String,
    pub recipient_email: String,
    pub params: HashMap<String, String>,
}

impl Notification {
    pub fn for_enrollment(template: TemplateKey, user: &ActingUser, event: &Event) -> Self {
        let mut params = HashMap::new();
        params.insert("event_name".into(), event.name.clone());
        params.insert("event_date".into(), event.timing_iso.clone());
        params.insert(
            "event_link".into(),
            if event.link.is_empty() {
                "N/A".into()
            } else {
                event.link.clone()
            },
        );
        Self {
            template,
            recipient_name: user.display_name_or_anonymous(),
            recipient_email: user.email.clone(),
            params,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::model::{
        event::DEFAULT_MAX_CAPACITY,
        id::{EventId, UserId},
    };

    fn sample_event(link: &str) -> Event {
        Event {
            event_id: EventId::new(),
            name: "Rust for the Backend".into(),
            speaker: "A. Speaker".into(),
            timing_iso: "2026-09-01T18:00".into(),
            time_zone: "Asia/Tokyo".into(),
            is_public: true,
            link: link.into(),
            description: String::new(),
            objectives: String::new(),
            topic_relevance: String::new(),
            category: "technology & software".into(),
            organizer_id: UserId::new(),
            organizer_email: "org@example.com".into(),
            created_at: Utc::now(),
            max_capacity: DEFAULT_MAX_CAPACITY,
            enrolled_count: 0,
        }
    }

    #[test]
    fn enrollment_notification_carries_event_params() {
        let user = ActingUser {
            user_id: UserId::new(),
            email: "attendee@example.com".into(),
            display_name: Some("Mori".into()),
        };
        let notification =
            Notification::for_enrollment(TemplateKey::Enrolled, &user, &sample_event("https://x"));

        assert_eq!(notification.recipient_email, "attendee@example.com");
        assert_eq!(notification.recipient_name, "Mori");
        assert_eq!(
            notification.params.get("event_name").map(String::as_str),
            Some("Rust for the Backend")
        );
        assert_eq!(
            notification.params.get("event_link").map(String::as_str),
            Some("https://x")
        );
    }

    #[test]
    fn missing_link_is_rendered_as_na() {
        let user = ActingUser {
            user_id: UserId::new(),
            email: "attendee@example.com".into(),
            display_name: None,
        };
        let notification =
            Notification::for_enrollment(TemplateKey::Unenrolled, &user, &sample_event(""));

        assert_eq!(
            notification.params.get("event_link").map(String::as_str),
            Some("N/A")
        );
        assert_eq!(notification.recipient_name, "Anonymous");
    }
}
