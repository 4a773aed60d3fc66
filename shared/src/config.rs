use anyhow::Result;

pub struct AppConfig {
    pub database: DatabaseConfig,
    pub redis: RedisConfig,
    pub auth: AuthConfig,
    pub mail: MailConfig,
}

impl AppConfig {
    pub fn new() -> Result<Self> {
        let database = DatabaseConfig {
            host: std::env::var("DATABASE_HOST")?,
            port: std::env::var("DATABASE_PORT")?.parse()?,
            username: std::env::var("DATABASE_USERNAME")?,
            password: std::env::var("DATABASE_PASSWORD")?,
            database: std::env::var("DATABASE_NAME")?,
        };
        let redis = RedisConfig {
            host: std::env::var("REDIS_HOST")?,
            port: std::env::var("REDIS_PORT")?.parse()?,
        };
        let auth = AuthConfig {
            ttl: std::env::var("AUTH_TOKEN_TTL")?.parse()?,
        };
        let mail = MailConfig::from_env();
        Ok(Self {
            database,
            redis,
            auth,
            mail,
        })
    }
}

pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub database: String,
}

pub struct RedisConfig {
    pub host: String,
    pub port: u16,
}

pub struct AuthConfig {
    pub ttl: u64,
}

/// Settings for the templated-mail HTTP API. Template ids are optional;
/// a notification whose template is not configured is skipped, not failed.
#[derive(Clone)]
pub struct MailConfig {
    pub endpoint: String,
    pub service_id: String,
    pub public_key: String,
    pub enrolled_template: Option<String>,
    pub unenrolled_template: Option<String>,
}

impl MailConfig {
    fn from_env() -> Self {
        Self {
            endpoint: std::env::var("MAIL_API_ENDPOINT")
                .unwrap_or_else(|_| "https://api.emailjs.com/api/v1.0/email/send".into()),
            service_id: std::env::var("MAIL_SERVICE_ID").unwrap_or_default(),
            public_key: std::env::var("MAIL_PUBLIC_KEY").unwrap_or_default(),
            enrolled_template: std::env::var("MAIL_TEMPLATE_ENROLLED").ok(),
            unenrolled_template: std::env::var("MAIL_TEMPLATE_UNENROLLED").ok(),
        }
    }
}
