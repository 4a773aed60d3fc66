pub mod auth;
pub mod enrollment;
pub mod event;
pub mod health;
pub mod user;
pub mod v1;
