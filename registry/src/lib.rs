use std::sync::Arc;

use adapter::{
    database::ConnectionPool,
    feed::EventFeed,
    mailer::MailNotifier,
    redis::RedisClient,
    repository::{
        auth::AuthRepositoryImpl, enrollment::EnrollmentRepositoryImpl,
        event::EventRepositoryImpl, health::HealthCheckRepositoryImpl,
        user::UserRepositoryImpl,
    },
};
use kernel::repository::{
    auth::AuthRepository, enrollment::EnrollmentRepository, event::EventRepository,
    health::HealthCheckRepository, user::UserRepository,
};
use shared::config::AppConfig;

#[derive(Clone)]
pub struct AppRegistry {
    health_check_repository: Arc<dyn HealthCheckRepository>,
    event_repository: Arc<dyn EventRepository>,
    enrollment_repository: Arc<dyn EnrollmentRepository>,
    user_repository: Arc<dyn UserRepository>,
    auth_repository: Arc<dyn AuthRepository>,
    mail_notifier: Arc<MailNotifier>,
    event_feed: EventFeed,
}

impl AppRegistry {
    pub fn new(pool: ConnectionPool, redis_client: Arc<RedisClient>, app_config: AppConfig) -> Self {
        let health_check_repository = Arc::new(HealthCheckRepositoryImpl::new(pool.clone()));
        let event_repository = Arc::new(EventRepositoryImpl::new(pool.clone()));
        let enrollment_repository = Arc::new(EnrollmentRepositoryImpl::new(pool.clone()));
        let user_repository = Arc::new(UserRepositoryImpl::new(pool.clone()));
        let auth_repository = Arc::new(AuthRepositoryImpl::new(
            pool.clone(),
            redis_client.clone(),
            app_config.auth.ttl,
        ));
        let mail_notifier = Arc::new(MailNotifier::new(app_config.mail.clone()));
        Self {
            health_check_repository,
            event_repository,
            enrollment_repository,
            user_repository,
            auth_repository,
            mail_notifier,
            event_feed: EventFeed::new(),
        }
    }

    pub fn health_check_repository(&self) -> Arc<dyn HealthCheckRepository> {
        self.health_check_repository.clone()
    }

    pub fn event_repository(&self) -> Arc<dyn EventRepository> {
        self.event_repository.clone()
    }

    pub fn enrollment_repository(&self) -> Arc<dyn EnrollmentRepository> {
        self.enrollment_repository.clone()
    }

    pub fn user_repository(&self) -> Arc<dyn UserRepository> {
        self.user_repository.clone()
    }

    pub fn auth_repository(&self) -> Arc<dyn AuthRepository> {
        self.auth_repository.clone()
    }

    pub fn mail_notifier(&self) -> Arc<MailNotifier> {
        self.mail_notifier.clone()
    }

    pub fn event_feed(&self) -> &EventFeed {
        &self.event_feed
    }
}
