pub mod calendar;
pub mod messages;
pub mod prompt;
