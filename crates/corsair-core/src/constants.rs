//! Simulation constants and tuning parameters.
//!
//! Speeds and turn rates are per-frame units: the simulation ticks once
//! per rendered frame with no fixed-timestep decoupling.

use glam::DVec3;

/// Display refresh rate the frame loop paces to (Hz).
pub const REFRESH_RATE: u32 = 60;

// --- Player boat ---

/// Speed added to linear velocity per throttle key press (units/frame).
/// Exact in binary, as is the decay step, so an idle boat reaches a
/// velocity of exactly 0.0 rather than a residue.
pub const BOAT_ACCELERATION: f64 = 0.25;

/// Clamp bound for the player's |linear velocity| (units/frame).
pub const BOAT_MAX_SPEED: f64 = 1.0;

/// Fixed turn rate set by a rudder key press (radians/frame).
pub const BOAT_TURN_RATE: f64 = 0.02;

/// Linear velocity lost per idle frame (units/frame).
pub const LINEAR_DECAY_STEP: f64 = 0.03125;

/// Angular velocity lost per idle frame (radians/frame).
pub const ANGULAR_DECAY_STEP: f64 = 0.005;

/// Player spawn position.
pub const BOAT_SPAWN_POSITION: DVec3 = DVec3::new(5.0, 13.0, 50.0);

/// Player spawn heading (radians).
pub const BOAT_SPAWN_HEADING: f64 = 1.5;

/// Boat model asset, shared by the player and pirates.
pub const BOAT_MODEL_PATH: &str = "assets/boat/scene.gltf";

/// Uniform scale of the boat model.
pub const BOAT_MODEL_SCALE: f64 = 3.0;

// --- Pirates ---

/// Default pirate count.
pub const PIRATE_COUNT: u32 = 3;

/// Planar distance below which a pirate steers directly at the player
/// instead of building speed (units).
pub const PIRATE_ENGAGE_RADIUS: f64 = 100.0;

/// Fraction of the angular error a pirate turns through per frame.
pub const PIRATE_TURN_GAIN: f64 = 0.05;

/// Maximum pirate turn per frame (radians).
pub const PIRATE_MAX_TURN: f64 = 0.02;

/// Speed added per frame while a pirate closes from outside the engage
/// radius (units/frame). Thrust is never clamped.
pub const PIRATE_THRUST: f64 = 0.005;

/// Minimum pirate spawn range from the player spawn (units).
pub const PIRATE_SPAWN_RANGE_MIN: f64 = 400.0;

/// Maximum pirate spawn range from the player spawn (units).
pub const PIRATE_SPAWN_RANGE_MAX: f64 = 1200.0;

// --- Treasures ---

/// Default treasure count.
pub const TREASURE_COUNT: u32 = 1000;

/// Treasures scatter uniformly over [-half, half]^2 in x/z (units).
pub const TREASURE_FIELD_HALF_EXTENT: f64 = 10_000.0;

/// Water-line height treasures sit at (units).
pub const TREASURE_HEIGHT: f64 = -0.5;

/// Treasure model asset, shared by all treasures.
pub const TREASURE_MODEL_PATH: &str = "assets/treasure/scene.gltf";

/// Uniform scale of the treasure model.
pub const TREASURE_MODEL_SCALE: f64 = 0.25;

// --- Pickup ---

/// Half-extent of the 30x30 pickup square centered on the player (units).
/// The test is strict: an offset of exactly 15.0 does not collect.
pub const PICKUP_HALF_EXTENT: f64 = 15.0;

// --- Camera ---

/// Distance the camera trails behind the boat (units).
pub const CAMERA_TRAIL_DISTANCE: f64 = 35.0;

/// Camera height above the boat deck (units).
pub const CAMERA_HEIGHT: f64 = 20.0;

/// Fixed offset added to the camera's x and z (units).
pub const CAMERA_OFFSET: f64 = 10.0;
