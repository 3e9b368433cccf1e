pub mod classify;
pub mod config;
pub mod mailbox;
pub mod merge;
pub mod model;
pub mod platform;
pub mod store;
