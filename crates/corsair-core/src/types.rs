//! Fundamental geometric and simulation types.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Simulation time tracking.
///
/// The frame rate is the tick rate; all speeds are per-frame units and
/// there is no dt scaling.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current frame number (increments by 1 each frame).
    pub frame: u64,
}

impl SimTime {
    /// Advance by one frame.
    pub fn advance(&mut self) {
        self.frame += 1;
    }

    /// Elapsed session time in seconds at the nominal refresh rate.
    pub fn elapsed_secs(&self) -> f64 {
        self.frame as f64 / crate::constants::REFRESH_RATE as f64
    }
}

/// Stable handle the renderer knows an entity's visual node by.
/// Allocated sequentially by the engine, never reused within a session.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct NodeId(pub u32);

/// What kind of visual an entity is backed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    /// The player's boat.
    Boat,
    /// A pursuing pirate (rendered from the boat template).
    Pirate,
    /// A collectible treasure chest.
    Treasure,
}

impl EntityKind {
    /// Model asset for this kind. The player and pirates share one boat
    /// template; all treasures share one treasure template.
    pub fn model_path(&self) -> &'static str {
        match self {
            EntityKind::Boat | EntityKind::Pirate => crate::constants::BOAT_MODEL_PATH,
            EntityKind::Treasure => crate::constants::TREASURE_MODEL_PATH,
        }
    }

    /// Uniform scale applied to the visual node.
    pub fn model_scale(&self) -> f64 {
        match self {
            EntityKind::Boat | EntityKind::Pirate => crate::constants::BOAT_MODEL_SCALE,
            EntityKind::Treasure => crate::constants::TREASURE_MODEL_SCALE,
        }
    }
}

/// Horizontal distance between two points (x/z plane, height ignored).
pub fn planar_distance(a: DVec3, b: DVec3) -> f64 {
    let dx = b.x - a.x;
    let dz = b.z - a.z;
    (dx * dx + dz * dz).sqrt()
}

/// Heading that faces `from` toward `to` in the horizontal plane.
///
/// Headings rotate about the vertical axis; the forward axis at heading
/// `h` is `(cos h, 0, -sin h)`, matching the renderer's rotation-about-Y
/// convention.
pub fn planar_bearing(from: DVec3, to: DVec3) -> f64 {
    let dx = to.x - from.x;
    let dz = to.z - from.z;
    (-dz).atan2(dx)
}

/// Wrap an angle to the half-open interval [-PI, PI).
pub fn wrap_angle(angle: f64) -> f64 {
    use std::f64::consts::{PI, TAU};
    (angle + PI).rem_euclid(TAU) - PI
}
