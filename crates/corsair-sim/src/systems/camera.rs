//! Chase camera — trails the player at a fixed radius and height.

use glam::DVec3;
use hecs::World;
use std::f64::consts::PI;

use corsair_core::constants::{CAMERA_HEIGHT, CAMERA_OFFSET, CAMERA_TRAIL_DISTANCE};
use corsair_core::state::CameraView;

/// Place the camera behind the player's current pose, looking at the
/// boat. Returns None while the player's model is still loading.
pub fn run(world: &World) -> Option<CameraView> {
    super::player_body(world).map(|body| pose_for(body.position, body.heading))
}

/// Camera pose for a boat pose. `PI - heading` lands the camera on the
/// ray opposite the forward axis; the flat offset nudges it off-center.
pub fn pose_for(position: DVec3, heading: f64) -> CameraView {
    let behind = PI - heading;
    CameraView {
        position: DVec3::new(
            behind.cos() * CAMERA_TRAIL_DISTANCE + position.x + CAMERA_OFFSET,
            position.y + CAMERA_HEIGHT,
            behind.sin() * CAMERA_TRAIL_DISTANCE + position.z + CAMERA_OFFSET,
        ),
        look_at: position,
    }
}
