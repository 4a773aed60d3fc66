use adapter::feed::{EventChange, EventChangeKind};
use axum::{
    extract::{Path, State},
    Json,
};
use kernel::model::{
    auth::Permission,
    enrollment::event::{EnrollToEvent, WithdrawFromEvent},
    event::Event,
    id::{EventId, UserId},
    notification::{Notification, TemplateKey},
    user::ActingUser,
};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::{
    extractor::AuthorizedUser,
    model::enrollment::{
        AttendeesResponse, EnrollmentOutcomeResponse, EnrollmentStatusResponse,
        ScheduleResponse,
    },
};

pub async fn enroll_event(
    user: AuthorizedUser,
    Path(event_id): Path<EventId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<EnrollmentOutcomeResponse>> {
    let acting_user = user.acting_user();
    let outcome = registry
        .enrollment_repository()
        .enroll(EnrollToEvent::new(event_id, acting_user.clone()))
        .await?;

    // Side effects only after the workflow has committed; a rejected
    // outcome changed nothing, so listeners and the mail provider stay
    // quiet.
    if outcome.accepted {
        notify(&registry, event_id, &acting_user, TemplateKey::Enrolled).await;
        registry.event_feed().publish(EventChange {
            event_id,
            kind: EventChangeKind::EnrollmentChanged,
        });
    }

    Ok(Json(outcome.into()))
}

pub async fn unenroll_event(
    user: AuthorizedUser,
    Path(event_id): Path<EventId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<EnrollmentOutcomeResponse>> {
    let acting_user = user.acting_user();
    let outcome = registry
        .enrollment_repository()
        .unenroll(WithdrawFromEvent::new(event_id, user.id()))
        .await?;

    notify(&registry, event_id, &acting_user, TemplateKey::Unenrolled).await;
    registry.event_feed().publish(EventChange {
        event_id,
        kind: EventChangeKind::EnrollmentChanged,
    });

    Ok(Json(outcome.into()))
}

/// Unauthenticated callers always read "not enrolled" rather than an error.
pub async fn enrollment_status(
    user: Option<AuthorizedUser>,
    Path(event_id): Path<EventId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<EnrollmentStatusResponse>> {
    let enrolled = resolve_enrollment_status(user.map(|user| user.id()), |user_id| async move {
        registry
            .enrollment_repository()
            .is_enrolled(event_id, user_id)
            .await
    })
    .await?;
    Ok(Json(EnrollmentStatusResponse { enrolled }))
}

// An absent identity short-circuits to "not enrolled"; the membership
// lookup runs only for authenticated callers.
async fn resolve_enrollment_status<F, Fut>(
    user_id: Option<UserId>,
    is_enrolled: F,
) -> AppResult<bool>
where
    F: FnOnce(UserId) -> Fut,
    Fut: std::future::Future<Output = AppResult<bool>>,
{
    match user_id {
        None => Ok(false),
        Some(user_id) => is_enrolled(user_id).await,
    }
}

pub async fn show_attendees(
    user: AuthorizedUser,
    Path(event_id): Path<EventId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<AttendeesResponse>> {
    let event = fetch_event(&registry, event_id).await?;
    require_organizer_of(&event, user.id())?;

    registry
        .enrollment_repository()
        .find_attendees_by_event_id(event_id)
        .await
        .map(AttendeesResponse::from)
        .map(Json)
}

/// Roster management: the organizer removes an attendee from their event.
pub async fn remove_attendee(
    user: AuthorizedUser,
    Path((event_id, attendee_id)): Path<(EventId, UserId)>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<EnrollmentOutcomeResponse>> {
    let event = fetch_event(&registry, event_id).await?;
    require_organizer_of(&event, user.id())?;

    let outcome = registry
        .enrollment_repository()
        .unenroll(WithdrawFromEvent::new(event_id, attendee_id))
        .await?;

    registry.event_feed().publish(EventChange {
        event_id,
        kind: EventChangeKind::EnrollmentChanged,
    });

    Ok(Json(outcome.into()))
}

pub async fn show_my_schedule(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ScheduleResponse>> {
    registry
        .enrollment_repository()
        .find_schedule_by_user_id(user.id())
        .await
        .map(ScheduleResponse::from)
        .map(Json)
}

async fn fetch_event(registry: &AppRegistry, event_id: EventId) -> AppResult<Event> {
    registry
        .event_repository()
        .find_by_id(event_id)
        .await?
        .ok_or_else(|| AppError::EntityNotFound(format!("event ({event_id}) not found")))
}

fn require_organizer_of(event: &Event, acting_user_id: UserId) -> AppResult<()> {
    if !Permission::for_event_mutation(event.organizer_id, acting_user_id).is_granted() {
        return Err(AppError::ForbiddenOperation(
            "only the organizer of an event may view or manage its roster".into(),
        ));
    }
    Ok(())
}

// Builds the notification from the post-commit event state and hands it to
// the background dispatcher. Nothing here may fail the workflow: a lookup
// error is logged, and an event already deleted by a racing organizer just
// means no mail.
async fn notify(
    registry: &AppRegistry,
    event_id: EventId,
    acting_user: &ActingUser,
    template: TemplateKey,
) {
    match registry.event_repository().find_by_id(event_id).await {
        Ok(Some(event)) => {
            registry
                .mail_notifier()
                .dispatch(Notification::for_enrollment(template, acting_user, &event));
        }
        Ok(None) => {}
        Err(e) => {
            tracing::warn!(error = %e, %event_id, "skipping notification, event lookup failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn absent_identity_reads_as_not_enrolled() {
        let enrolled = resolve_enrollment_status(None, |_| async {
            // The lookup's answer must never surface for anonymous callers.
            AppResult::Ok(true)
        })
        .await;
        assert_eq!(enrolled.ok(), Some(false));
    }

    #[tokio::test]
    async fn authenticated_identity_reads_through_the_lookup() {
        let asked = UserId::new();
        let enrolled = resolve_enrollment_status(Some(asked), |user_id| async move {
            assert_eq!(user_id, asked);
            AppResult::Ok(true)
        })
        .await;
        assert_eq!(enrolled.ok(), Some(true));
    }
}
