//! Pirate pursuit AI for CORSAIR.
//!
//! Implements the per-pirate steering policy: build speed toward the
//! player from range, steer directly at the player once close.

pub mod steering;

pub use corsair_core as core;

#[cfg(test)]
mod tests;
