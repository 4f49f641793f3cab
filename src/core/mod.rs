pub mod engine;
pub mod rectangle;
pub mod state;
