pub mod database;
pub mod feed;
pub mod mailer;
pub mod redis;
pub mod repository;
