//! Core types and definitions for the CORSAIR simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, input events, scene events, state snapshots, and constants.
//! It has no dependency on the ECS or any runtime framework.

pub mod components;
pub mod constants;
pub mod events;
pub mod input;
pub mod loading;
pub mod state;
pub mod types;
