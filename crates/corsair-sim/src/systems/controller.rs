//! Throttle and rudder controller.
//!
//! Key events mutate `MotionState` the instant they are drained; a
//! per-frame decay pass coasts whichever axes are idle back toward zero.
//! Acceleration is edge-triggered on key-down — holding a key adds
//! nothing beyond the first event, and key-up never zeroes velocity.

use hecs::World;

use corsair_core::components::{MotionState, PlayerBoat};
use corsair_core::constants::{ANGULAR_DECAY_STEP, BOAT_TURN_RATE, LINEAR_DECAY_STEP};
use corsair_core::input::{Control, ControlAxis};

/// Apply a key-down event to the motion state.
///
/// Throttle keys add one acceleration quantum (clamped); rudder keys set
/// the turn rate outright. Both mark their axis held.
pub fn on_key_down(motion: &mut MotionState, control: Control) {
    match control {
        Control::Ahead => {
            motion.linear_velocity += motion.acceleration;
            motion.idle_linear = false;
            clamp_linear(motion);
        }
        Control::Astern => {
            motion.linear_velocity -= motion.acceleration;
            motion.idle_linear = false;
            clamp_linear(motion);
        }
        Control::Starboard => {
            motion.angular_velocity = -BOAT_TURN_RATE;
            motion.idle_angular = false;
        }
        Control::Port => {
            motion.angular_velocity = BOAT_TURN_RATE;
            motion.idle_angular = false;
        }
    }
}

/// Apply a key-up event: flip the matching axis idle. Velocity keeps its
/// value; decay takes over on following frames.
pub fn on_key_up(motion: &mut MotionState, control: Control) {
    match control.axis() {
        ControlAxis::Linear => motion.idle_linear = true,
        ControlAxis::Angular => motion.idle_angular = true,
    }
}

/// One frame of friction decay on idle axes. Held axes keep their value.
pub fn decay(motion: &mut MotionState) {
    if motion.idle_linear {
        motion.linear_velocity = decay_toward_zero(motion.linear_velocity, LINEAR_DECAY_STEP);
    }
    if motion.idle_angular {
        motion.angular_velocity = decay_toward_zero(motion.angular_velocity, ANGULAR_DECAY_STEP);
    }
}

/// Run decay for the player. Pirates never decay; pursuit owns their speed.
pub fn run_decay(world: &mut World) {
    for (_entity, (_player, motion)) in world.query_mut::<(&PlayerBoat, &mut MotionState)>() {
        decay(motion);
    }
}

/// Sign-preserving clamp of linear velocity to the configured bound.
fn clamp_linear(motion: &mut MotionState) {
    motion.linear_velocity = motion
        .linear_velocity
        .clamp(-motion.max_linear_velocity, motion.max_linear_velocity);
}

/// Step a value toward zero, snapping to exactly zero once within one
/// step. Never crosses zero.
fn decay_toward_zero(value: f64, step: f64) -> f64 {
    if value.abs() <= step {
        0.0
    } else {
        value - step.copysign(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use corsair_core::constants::{BOAT_ACCELERATION, BOAT_MAX_SPEED};

    fn player_motion() -> MotionState {
        MotionState {
            linear_velocity: 0.0,
            angular_velocity: 0.0,
            acceleration: BOAT_ACCELERATION,
            max_linear_velocity: BOAT_MAX_SPEED,
            idle_linear: true,
            idle_angular: true,
        }
    }

    #[test]
    fn test_key_down_adds_one_quantum() {
        let mut motion = player_motion();
        on_key_down(&mut motion, Control::Ahead);

        assert_eq!(motion.linear_velocity, BOAT_ACCELERATION);
        assert!(!motion.idle_linear);
    }

    #[test]
    fn test_repeated_key_down_clamps_at_max() {
        let mut motion = player_motion();
        for _ in 0..20 {
            on_key_down(&mut motion, Control::Ahead);
            assert!(motion.linear_velocity.abs() <= BOAT_MAX_SPEED);
        }
        assert_eq!(motion.linear_velocity, BOAT_MAX_SPEED);
    }

    #[test]
    fn test_astern_clamps_at_negative_max() {
        let mut motion = player_motion();
        for _ in 0..20 {
            on_key_down(&mut motion, Control::Astern);
        }
        assert_eq!(motion.linear_velocity, -BOAT_MAX_SPEED);
    }

    #[test]
    fn test_rudder_sets_fixed_rate() {
        let mut motion = player_motion();
        on_key_down(&mut motion, Control::Port);
        assert_eq!(motion.angular_velocity, BOAT_TURN_RATE);

        on_key_down(&mut motion, Control::Starboard);
        assert_eq!(motion.angular_velocity, -BOAT_TURN_RATE);
        assert!(!motion.idle_angular);
    }

    #[test]
    fn test_key_up_marks_idle_without_zeroing() {
        let mut motion = player_motion();
        on_key_down(&mut motion, Control::Ahead);
        on_key_up(&mut motion, Control::Ahead);

        assert!(motion.idle_linear);
        assert_eq!(motion.linear_velocity, BOAT_ACCELERATION);
    }

    #[test]
    fn test_decay_skips_held_axes() {
        let mut motion = player_motion();
        on_key_down(&mut motion, Control::Ahead);
        for _ in 0..50 {
            decay(&mut motion);
        }
        assert_eq!(motion.linear_velocity, BOAT_ACCELERATION);
    }

    #[test]
    fn test_linear_decay_reaches_exact_zero() {
        let mut motion = player_motion();
        on_key_down(&mut motion, Control::Ahead);
        on_key_up(&mut motion, Control::Ahead);

        let frames = (BOAT_ACCELERATION / LINEAR_DECAY_STEP).ceil() as u32;
        let mut previous = motion.linear_velocity;
        for _ in 0..frames - 1 {
            decay(&mut motion);
            assert!(motion.linear_velocity > 0.0);
            assert!(motion.linear_velocity < previous);
            previous = motion.linear_velocity;
        }
        decay(&mut motion);
        assert_eq!(motion.linear_velocity, 0.0);
    }

    #[test]
    fn test_decay_never_crosses_zero() {
        let mut motion = player_motion();
        on_key_down(&mut motion, Control::Astern);
        on_key_up(&mut motion, Control::Astern);

        for _ in 0..100 {
            decay(&mut motion);
            assert!(motion.linear_velocity <= 0.0);
        }
        assert_eq!(motion.linear_velocity, 0.0);
    }

    #[test]
    fn test_angular_decay_snaps_on_fourth_frame() {
        let mut motion = player_motion();
        on_key_down(&mut motion, Control::Port);
        on_key_up(&mut motion, Control::Port);

        for _ in 0..3 {
            decay(&mut motion);
            assert!(motion.angular_velocity > 0.0);
        }
        decay(&mut motion);
        assert_eq!(motion.angular_velocity, 0.0);
    }

    #[test]
    fn test_axes_decay_independently() {
        let mut motion = player_motion();
        on_key_down(&mut motion, Control::Ahead);
        on_key_down(&mut motion, Control::Port);
        on_key_up(&mut motion, Control::Port);

        for _ in 0..10 {
            decay(&mut motion);
        }
        assert_eq!(motion.angular_velocity, 0.0);
        assert_eq!(motion.linear_velocity, BOAT_ACCELERATION);
    }
}
