use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    auth::Permission,
    event::{
        event::{CreateEvent, DeleteEvent, UpdateEvent},
        Event,
    },
    id::{EventId, UserId},
};
use kernel::repository::event::EventRepository;
use shared::error::{AppError, AppResult};

use crate::database::{model::event::EventRow, ConnectionPool};

const EVENT_COLUMNS: &str = r#"
    event_id, name, speaker, timing_iso, time_zone, is_public,
    link, description, objectives, topic_relevance, category,
    organizer_id, organizer_email, created_at, max_capacity, enrolled_count
"#;

#[derive(new)]
pub struct EventRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl EventRepository for EventRepositoryImpl {
    async fn create(&self, event: CreateEvent) -> AppResult<EventId> {
        let event_id = EventId::new();
        let res = sqlx::query(
            r#"
                INSERT INTO events
                (event_id, name, speaker, timing_iso, time_zone, is_public,
                 link, description, objectives, topic_relevance, category,
                 organizer_id, organizer_email, max_capacity)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            "#,
        )
        .bind(event_id)
        .bind(&event.name)
        .bind(&event.speaker)
        .bind(&event.timing_iso)
        .bind(&event.time_zone)
        .bind(event.is_public)
        .bind(&event.link)
        .bind(&event.description)
        .bind(&event.objectives)
        .bind(&event.topic_relevance)
        .bind(&event.category)
        .bind(event.organizer_id)
        .bind(&event.organizer_email)
        .bind(event.max_capacity)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No event record has been created".into(),
            ));
        }

        Ok(event_id)
    }

    async fn find_all(&self) -> AppResult<Vec<Event>> {
        let rows: Vec<EventRow> = sqlx::query_as(&format!(
            r#"
                SELECT {EVENT_COLUMNS}
                FROM events
                ORDER BY created_at DESC
            "#
        ))
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Event::from).collect())
    }

    async fn find_by_id(&self, event_id: EventId) -> AppResult<Option<Event>> {
        let row: Option<EventRow> = sqlx::query_as(&format!(
            r#"
                SELECT {EVENT_COLUMNS}
                FROM events
                WHERE event_id = $1
            "#
        ))
        .bind(event_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(Event::from))
    }

    async fn find_by_organizer_id(&self, organizer_id: UserId) -> AppResult<Vec<Event>> {
        let rows: Vec<EventRow> = sqlx::query_as(&format!(
            r#"
                SELECT {EVENT_COLUMNS}
                FROM events
                WHERE organizer_id = $1
                ORDER BY created_at DESC
            "#
        ))
        .bind(organizer_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Event::from).collect())
    }

    async fn update(&self, event: UpdateEvent) -> AppResult<()> {
        let mut tx = self.db.begin().await?;

        self.check_event_ownership(&mut tx, event.event_id, event.requested_user)
            .await?;

        // COALESCE keeps columns the request left out untouched; the
        // enrollment counter is never writable through this path.
        let res = sqlx::query(
            r#"
                UPDATE events
                SET name = COALESCE($2, name),
                    speaker = COALESCE($3, speaker),
                    timing_iso = COALESCE($4, timing_iso),
                    time_zone = COALESCE($5, time_zone),
                    is_public = COALESCE($6, is_public),
                    link = COALESCE($7, link),
                    description = COALESCE($8, description),
                    objectives = COALESCE($9, objectives),
                    topic_relevance = COALESCE($10, topic_relevance),
                    category = COALESCE($11, category),
                    max_capacity = COALESCE($12, max_capacity)
                WHERE event_id = $1
            "#,
        )
        .bind(event.event_id)
        .bind(event.name)
        .bind(event.speaker)
        .bind(event.timing_iso)
        .bind(event.time_zone)
        .bind(event.is_public)
        .bind(event.link)
        .bind(event.description)
        .bind(event.objectives)
        .bind(event.topic_relevance)
        .bind(event.category)
        .bind(event.max_capacity)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No event record has been updated".into(),
            ));
        }

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(())
    }

    // Deletion does not cascade into attendees or user_enrollments; stale
    // schedule entries are dropped lazily when the schedule is read.
    async fn delete(&self, event: DeleteEvent) -> AppResult<()> {
        let mut tx = self.db.begin().await?;

        self.check_event_ownership(&mut tx, event.event_id, event.requested_user)
            .await?;

        let res = sqlx::query(
            r#"
                DELETE FROM events WHERE event_id = $1
            "#,
        )
        .bind(event.event_id)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No event record has been deleted".into(),
            ));
        }

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(())
    }
}

impl EventRepositoryImpl {
    // Typed ownership check, evaluated server-side before any mutation.
    async fn check_event_ownership(
        &self,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        event_id: EventId,
        requested_user: UserId,
    ) -> AppResult<()> {
        let organizer_id: Option<UserId> = sqlx::query_scalar(
            r#"
                SELECT organizer_id FROM events WHERE event_id = $1
            "#,
        )
        .bind(event_id)
        .fetch_optional(&mut **tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        let Some(organizer_id) = organizer_id else {
            return Err(AppError::EntityNotFound(format!(
                "event ({event_id}) not found"
            )));
        };

        if !Permission::for_event_mutation(organizer_id, requested_user).is_granted() {
            return Err(AppError::ForbiddenOperation(
                "only the organizer of an event may modify it".into(),
            ));
        }

        Ok(())
    }
}
