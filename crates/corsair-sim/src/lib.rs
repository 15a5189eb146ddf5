//! Simulation engine for CORSAIR.
//!
//! Owns the hecs ECS world, steps it once per rendered frame,
//! and produces WorldSnapshots for the renderer.

pub mod engine;
pub mod systems;
pub mod world_setup;

pub use corsair_core as core;
pub use engine::SimulationEngine;
