pub mod active;
pub mod add;
pub mod calendar;
pub mod config;
pub mod del;
pub mod edit;
pub mod export;
pub mod import;
pub mod init;
pub mod list;
pub mod log;
pub mod show;
pub mod vacation;
