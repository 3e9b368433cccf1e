pub mod conversation;
pub mod drop_overlay;
pub mod log_panel;
pub mod monologue;
pub mod mood;
pub mod presence;
