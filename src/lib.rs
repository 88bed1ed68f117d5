// Public API for integration tests and potential library usage

pub mod bot;
pub mod config;
pub mod messenger;
pub mod poll;
pub mod provider;
pub mod sanitize;
pub mod state;
pub mod types;
