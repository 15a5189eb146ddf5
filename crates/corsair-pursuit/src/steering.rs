//! Pursuit steering policy.
//!
//! Pure functions that decide, per frame, whether a pirate builds speed
//! or steers directly at the player based on planar distance.
//! No ECS dependency — operates on plain data.

use glam::DVec3;

use corsair_core::constants::{PIRATE_ENGAGE_RADIUS, PIRATE_MAX_TURN, PIRATE_TURN_GAIN};
use corsair_core::types::{planar_bearing, planar_distance, wrap_angle};

/// Input to the pursuit policy for a single pirate.
///
/// The policy keeps no state between frames; everything it needs is
/// recomputed fresh from the current relative position.
pub struct PursuitContext {
    /// Pirate body position.
    pub position: DVec3,
    /// Pirate heading (radians).
    pub heading: f64,
    /// Player body position this frame.
    pub quarry: DVec3,
}

/// Tuning for the pursuit policy.
pub struct PursuitProfile {
    /// Planar distance below which the pirate steers instead of thrusting.
    pub engage_radius: f64,
    /// Fraction of the angular error turned through per frame.
    pub turn_gain: f64,
    /// Per-frame turn magnitude cap (radians).
    pub max_turn: f64,
}

impl PursuitProfile {
    /// The standard pirate.
    pub fn standard() -> Self {
        Self {
            engage_radius: PIRATE_ENGAGE_RADIUS,
            turn_gain: PIRATE_TURN_GAIN,
            max_turn: PIRATE_MAX_TURN,
        }
    }
}

/// Output of the pursuit policy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PursuitAction {
    /// Within the engage radius: apply `turn` radians straight onto the
    /// pirate's heading, bypassing angular velocity and decay.
    Steer { turn: f64 },
    /// Outside the engage radius: add the pirate's acceleration to its
    /// linear velocity. Thrust is never clamped.
    Thrust,
}

/// Evaluate the policy for one pirate.
///
/// Distance is planar (x/z only); a pirate directly above or below the
/// player is treated as on top of it. The steering branch turns the
/// shortest way through the angular seam.
pub fn decide(ctx: &PursuitContext, profile: &PursuitProfile) -> PursuitAction {
    let distance = planar_distance(ctx.position, ctx.quarry);
    if distance < profile.engage_radius {
        let bearing = planar_bearing(ctx.position, ctx.quarry);
        let error = wrap_angle(bearing - ctx.heading);
        let turn = (error * profile.turn_gain).clamp(-profile.max_turn, profile.max_turn);
        PursuitAction::Steer { turn }
    } else {
        PursuitAction::Thrust
    }
}
