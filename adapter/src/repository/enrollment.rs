use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    enrollment::{
        event::{EnrollToEvent, WithdrawFromEvent},
        policy::{self, EnrollDecision},
        Enrollment, EnrollmentOutcome, ScheduleEntry,
    },
    id::{EventId, UserId},
};
use kernel::repository::enrollment::EnrollmentRepository;
use shared::error::{AppError, AppResult};

use crate::database::{
    model::{
        enrollment::{AttendeeRow, ScheduleEntryRow},
        event::EventGuardRow,
    },
    ConnectionPool,
};

#[derive(new)]
pub struct EnrollmentRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl EnrollmentRepository for EnrollmentRepositoryImpl {
    // The whole guarded workflow runs under one SERIALIZABLE transaction,
    // so two concurrent enrollments cannot both pass the capacity check.
    // Write order inside the transaction still follows the conservative
    // bias: membership first, counter second, index last.
    async fn enroll(&self, event: EnrollToEvent) -> AppResult<EnrollmentOutcome> {
        let EnrollToEvent {
            event_id,
            acting_user,
        } = event;

        let mut tx = self.db.begin().await?;
        self.set_transaction_serializable(&mut tx).await?;

        let guard: Option<EventGuardRow> = sqlx::query_as(
            r#"
                SELECT name, organizer_id, enrolled_count, max_capacity
                FROM events
                WHERE event_id = $1
            "#,
        )
        .bind(event_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        let Some(guard) = guard else {
            return Err(AppError::EntityNotFound(format!(
                "event ({event_id}) not found"
            )));
        };

        let already_enrolled: bool = sqlx::query_scalar(
            r#"
                SELECT EXISTS (
                    SELECT 1 FROM attendees WHERE event_id = $1 AND user_id = $2
                )
            "#,
        )
        .bind(event_id)
        .bind(acting_user.user_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        match policy::decide_enroll(guard.state(), acting_user.user_id, already_enrolled) {
            // Dropping the transaction rolls it back; a rejection performs
            // zero writes.
            EnrollDecision::Reject(message) => {
                return Ok(EnrollmentOutcome::rejected(message))
            }
            EnrollDecision::Accept => {}
        }

        let res = sqlx::query(
            r#"
                INSERT INTO attendees (event_id, user_id, email, display_name)
                VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(event_id)
        .bind(acting_user.user_id)
        .bind(&acting_user.email)
        .bind(acting_user.display_name_or_anonymous())
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No attendee record has been created".into(),
            ));
        }

        // Counter bump stays an in-store increment, never a client-side
        // read-modify-write.
        sqlx::query(
            r#"
                UPDATE events
                SET enrolled_count = enrolled_count + 1
                WHERE event_id = $1
            "#,
        )
        .bind(event_id)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        sqlx::query(
            r#"
                INSERT INTO user_enrollments (user_id, event_id, event_name)
                VALUES ($1, $2, $3)
            "#,
        )
        .bind(acting_user.user_id)
        .bind(event_id)
        .bind(&guard.name)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(EnrollmentOutcome::accepted(policy::MSG_ENROLLED))
    }

    // Unconditional by design: the deletes do not distinguish
    // delete-of-absent from delete-of-present, and the decrement may drive
    // the counter negative when no matching enrollment existed.
    async fn unenroll(&self, event: WithdrawFromEvent) -> AppResult<EnrollmentOutcome> {
        let WithdrawFromEvent {
            event_id,
            attendee_id,
        } = event;

        let mut tx = self.db.begin().await?;

        sqlx::query(
            r#"
                DELETE FROM attendees WHERE event_id = $1 AND user_id = $2
            "#,
        )
        .bind(event_id)
        .bind(attendee_id)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        sqlx::query(
            r#"
                UPDATE events
                SET enrolled_count = enrolled_count - 1
                WHERE event_id = $1
            "#,
        )
        .bind(event_id)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        sqlx::query(
            r#"
                DELETE FROM user_enrollments WHERE user_id = $1 AND event_id = $2
            "#,
        )
        .bind(attendee_id)
        .bind(event_id)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(EnrollmentOutcome::accepted(policy::MSG_UNENROLLED))
    }

    async fn is_enrolled(&self, event_id: EventId, user_id: UserId) -> AppResult<bool> {
        sqlx::query_scalar(
            r#"
                SELECT EXISTS (
                    SELECT 1 FROM attendees WHERE event_id = $1 AND user_id = $2
                )
            "#,
        )
        .bind(event_id)
        .bind(user_id)
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)
    }

    async fn find_attendees_by_event_id(
        &self,
        event_id: EventId,
    ) -> AppResult<Vec<Enrollment>> {
        let rows: Vec<AttendeeRow> = sqlx::query_as(
            r#"
                SELECT event_id, user_id, email, display_name, enrolled_at
                FROM attendees
                WHERE event_id = $1
                ORDER BY enrolled_at ASC
            "#,
        )
        .bind(event_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Enrollment::from).collect())
    }

    // The inner join drops index entries whose event has been deleted, the
    // lazy-filtering side of the orphaned-entry trade-off. ISO-8601 strings
    // order lexically, so sorting on timing_iso puts the soonest event
    // first.
    async fn find_schedule_by_user_id(
        &self,
        user_id: UserId,
    ) -> AppResult<Vec<ScheduleEntry>> {
        let rows: Vec<ScheduleEntryRow> = sqlx::query_as(
            r#"
                SELECT ue.event_id, ue.event_name, ue.enrolled_at
                FROM user_enrollments AS ue
                INNER JOIN events AS e ON e.event_id = ue.event_id
                WHERE ue.user_id = $1
                ORDER BY e.timing_iso ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(ScheduleEntry::from).collect())
    }
}

impl EnrollmentRepositoryImpl {
    async fn set_transaction_serializable(
        &self,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    ) -> AppResult<()> {
        sqlx::query("SET TRANSACTION ISOLATION LEVEL SERIALIZABLE")
            .execute(&mut **tx)
            .await
            .map_err(AppError::SpecificOperationError)?;
        Ok(())
    }
}
