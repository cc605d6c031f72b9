pub mod competition;
pub mod notice;
pub mod registration;
pub mod schedule;
pub mod session;
pub mod user;
