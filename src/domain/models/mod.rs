pub mod auth;
pub mod shift;
pub mod user;
