pub mod admin;
pub mod auth;
pub mod common;
pub mod competition;
pub mod dashboard;
pub mod notice;
pub mod registration;
pub mod schedule;
pub mod user;
