pub mod auth;
pub mod competitions;
pub mod dashboard;
pub mod notices;
pub mod registrations;
pub mod schedules;
pub mod users;
