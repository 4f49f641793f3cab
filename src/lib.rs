pub mod cli;
pub mod client;
pub mod config;
pub mod core;
pub mod states;

// Re-export for convenience
pub use crate::core::state::{GameState, Transition};
