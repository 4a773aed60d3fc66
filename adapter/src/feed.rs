use kernel::model::id::EventId;
use serde::Serialize;
use tokio::sync::broadcast;

const FEED_BUFFER: usize = 64;

/// A change notice pushed to live listeners whenever the events collection
/// mutates. Carries no payload beyond the id and kind; listeners re-query.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventChange {
    pub event_id: EventId,
    pub kind: EventChangeKind,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum EventChangeKind {
    Created,
    Updated,
    Deleted,
    EnrollmentChanged,
}

/// In-process fan-out for live event updates. Subscriptions are explicit
/// handles; dropping the handle tears the subscription down and no further
/// notices are delivered.
#[derive(Clone)]
pub struct EventFeed {
    tx: broadcast::Sender<EventChange>,
}

impl EventFeed {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(FEED_BUFFER);
        Self { tx }
    }

    pub fn subscribe(&self) -> EventFeedSubscription {
        EventFeedSubscription {
            rx: self.tx.subscribe(),
        }
    }

    /// Lossy by design: a notice published with no live subscribers is
    /// dropped.
    pub fn publish(&self, change: EventChange) {
        let _ = self.tx.send(change);
    }
}

impl Default for EventFeed {
    fn default() -> Self {
        Self::new()
    }
}

pub struct EventFeedSubscription {
    rx: broadcast::Receiver<EventChange>,
}

impl EventFeedSubscription {
    pub fn into_inner(self) -> broadcast::Receiver<EventChange> {
        self.rx
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn subscriber_receives_published_changes() {
        let feed = EventFeed::new();
        let mut rx = feed.subscribe().into_inner();

        let event_id = EventId::new();
        feed.publish(EventChange {
            event_id,
            kind: EventChangeKind::Created,
        });

        let change = rx.recv().await.unwrap();
        assert_eq!(change.event_id, event_id);
    }

    #[tokio::test]
    async fn dropped_subscription_stops_delivery() {
        let feed = EventFeed::new();
        let rx = feed.subscribe().into_inner();
        drop(rx);

        // No live receiver left; publish must not panic.
        feed.publish(EventChange {
            event_id: EventId::new(),
            kind: EventChangeKind::Deleted,
        });
        assert_eq!(feed.tx.receiver_count(), 0);
    }
}
