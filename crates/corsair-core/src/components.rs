//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Position and facing of a live entity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KinematicBody {
    /// Position in world units. x/z span the water plane, y is up.
    pub position: DVec3,
    /// Rotation about the vertical axis in radians. Wrapped implicitly by
    /// repeated addition; normalization is a display concern only.
    pub heading: f64,
}

/// Velocity state and throttle configuration for a steerable entity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MotionState {
    /// Forward speed in units per frame. Negative runs astern.
    pub linear_velocity: f64,
    /// Turn rate in radians per frame.
    pub angular_velocity: f64,
    /// Speed added per throttle press (player) or per closing frame (pirate).
    pub acceleration: f64,
    /// Clamp bound for |linear_velocity| on the controller path.
    pub max_linear_velocity: f64,
    /// No throttle key is held; linear decay applies each frame.
    pub idle_linear: bool,
    /// No rudder key is held; angular decay applies each frame.
    pub idle_angular: bool,
}

/// Load-gated body slot.
///
/// An entity has no body to advance until its model load completes; every
/// system matches this tag before touching the pose. An entity whose load
/// failed stays `Pending` for the rest of the session.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(tag = "status")]
pub enum Hull {
    /// Model still loading. The recorded pose is where the body will appear.
    Pending { position: DVec3, heading: f64 },
    /// Model loaded; the body is live.
    Ready(KinematicBody),
}

/// Marks the player's boat. Exactly one per world.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlayerBoat;

/// Marks a pursuing pirate.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Pirate;

/// A collectible. Marked dead on pickup, despawned at end of frame.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Treasure {
    pub alive: bool,
}

// NodeId (types.rs) is also attached to every renderable entity as a
// component, pairing it with its visual node.
