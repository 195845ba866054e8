// Game module - Contains the game state machine and per-run session
//
// This module contains:
// - state.rs: GameState, Scene, the outcome table and the pure click transition
// - session.rs: Session, the state owned by the frame loop

pub mod session;
pub mod state;

// Re-export types for convenience
pub use session::Session;
pub use state::{GameState, Scene};
