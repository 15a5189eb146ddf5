//! CORSAIR host application.
//!
//! Wires the simulation engine to an asset loader worker and a headless
//! scene mirror, and runs the whole thing at display rate from a game
//! loop thread.

pub mod game_loop;
pub mod loader;
pub mod renderer;
pub mod state;

pub use corsair_core as core;
