pub mod auth;
pub mod enrollment;
pub mod event;
pub mod id;
pub mod notification;
pub mod role;
pub mod user;
