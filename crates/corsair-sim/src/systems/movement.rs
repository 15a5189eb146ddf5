//! Kinematic integration — moves bodies along their local forward axis.
//!
//! The forward axis at heading `h` is `(cos h, 0, -sin h)`: heading is a
//! rotation about +y, positive counter-clockwise seen from above.

use hecs::World;

use corsair_core::components::{Hull, KinematicBody, MotionState, PlayerBoat};

/// Integrate one frame of motion into a body: turn first, then translate
/// along the new heading. Height is never touched.
pub fn advance(body: &mut KinematicBody, motion: &MotionState) {
    body.heading += motion.angular_velocity;
    body.position.x += motion.linear_velocity * body.heading.cos();
    body.position.z -= motion.linear_velocity * body.heading.sin();
}

/// Write a steering correction straight onto the heading. Second mutation
/// path used by pursuit only: it bypasses angular velocity, so it is
/// untouched by rudder decay.
pub fn apply_direct_steering(body: &mut KinematicBody, turn: f64) {
    body.heading += turn;
}

/// Advance the player's body from its controller state. A hull still
/// waiting on its model does not move.
pub fn run(world: &mut World) {
    for (_entity, (_player, hull, motion)) in
        world.query_mut::<(&PlayerBoat, &mut Hull, &MotionState)>()
    {
        if let Hull::Ready(body) = hull {
            advance(body, motion);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;
    use std::f64::consts::FRAC_PI_2;

    fn body_at_origin() -> KinematicBody {
        KinematicBody {
            position: DVec3::ZERO,
            heading: 0.0,
        }
    }

    fn motion(linear: f64, angular: f64) -> MotionState {
        MotionState {
            linear_velocity: linear,
            angular_velocity: angular,
            acceleration: 0.0,
            max_linear_velocity: f64::MAX,
            idle_linear: true,
            idle_angular: true,
        }
    }

    #[test]
    fn test_advance_moves_along_forward_axis() {
        let mut body = body_at_origin();
        advance(&mut body, &motion(2.0, 0.0));

        assert!((body.position.x - 2.0).abs() < 1e-12);
        assert!(body.position.z.abs() < 1e-12);
        assert!((body.position.y).abs() < 1e-12);
    }

    #[test]
    fn test_advance_turns_before_translating() {
        // A quarter turn applied in the same frame must redirect the whole
        // translation, not half of it.
        let mut body = body_at_origin();
        advance(&mut body, &motion(1.0, FRAC_PI_2));

        assert!((body.heading - FRAC_PI_2).abs() < 1e-12);
        assert!(body.position.x.abs() < 1e-12);
        assert!((body.position.z + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_advance_reverse_velocity_backs_up() {
        let mut body = body_at_origin();
        advance(&mut body, &motion(-0.5, 0.0));

        assert!((body.position.x + 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_direct_steering_leaves_position_alone() {
        let mut body = body_at_origin();
        apply_direct_steering(&mut body, 0.02);

        assert!((body.heading - 0.02).abs() < 1e-15);
        assert_eq!(body.position, DVec3::ZERO);
    }
}
