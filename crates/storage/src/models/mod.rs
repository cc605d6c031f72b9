mod competition;
mod notice;
mod registration;
mod schedule;
mod session;
mod user;

pub use competition::Competition;
pub use notice::Notice;
pub use registration::{Registration, RegistrationStatus};
pub use schedule::Schedule;
pub use session::Session;
pub use user::User;
