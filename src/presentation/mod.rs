// Presentation layer - Command-line trigger surface
pub mod app_state;
pub mod cli;
pub mod handlers;
