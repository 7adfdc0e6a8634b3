pub mod auth;
pub mod balance;
pub mod health;
pub mod member;
pub mod shift;
pub mod skill;
