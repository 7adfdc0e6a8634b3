pub mod auth_service;
pub mod balance;
pub mod calendar;
