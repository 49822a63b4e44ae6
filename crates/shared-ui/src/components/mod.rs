pub mod action_control;
pub mod filter_input;

// Re-exports for convenience
pub use action_control::*;
pub use filter_input::*;
