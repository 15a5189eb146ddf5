//! ECS systems that operate on the simulation world each frame.
//!
//! Systems are free functions that take `&mut World` (or `&World` for read-only).
//! They do not own state — all state lives in components or on the engine.

pub mod camera;
pub mod cleanup;
pub mod collision;
pub mod controller;
pub mod loading;
pub mod movement;
pub mod pursuit;
pub mod snapshot;

use corsair_core::components::{Hull, KinematicBody, PlayerBoat};
use hecs::World;

/// The player's live body, if its model has loaded.
pub(crate) fn player_body(world: &World) -> Option<KinematicBody> {
    world
        .query::<(&PlayerBoat, &Hull)>()
        .iter()
        .next()
        .and_then(|(_, (_, hull))| match hull {
            Hull::Ready(body) => Some(*body),
            Hull::Pending { .. } => None,
        })
}
