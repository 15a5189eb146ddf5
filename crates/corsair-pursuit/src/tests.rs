#[cfg(test)]
mod tests {
    use glam::DVec3;
    use std::f64::consts::{FRAC_PI_2, PI};

    use corsair_core::constants::*;

    use crate::steering::{decide, PursuitAction, PursuitContext, PursuitProfile};

    /// Place the quarry at a given planar bearing and distance from the
    /// pirate. Bearing follows the forward-axis convention
    /// `(cos h, 0, -sin h)`.
    fn quarry_at(pirate: DVec3, bearing: f64, distance: f64) -> DVec3 {
        DVec3::new(
            pirate.x + distance * bearing.cos(),
            pirate.y,
            pirate.z - distance * bearing.sin(),
        )
    }

    fn make_context(position: DVec3, heading: f64, quarry: DVec3) -> PursuitContext {
        PursuitContext {
            position,
            heading,
            quarry,
        }
    }

    #[test]
    fn test_thrust_outside_engage_radius() {
        let pirate = DVec3::new(0.0, 13.0, 0.0);
        let ctx = make_context(pirate, 0.0, quarry_at(pirate, 0.0, 150.0));
        assert_eq!(decide(&ctx, &PursuitProfile::standard()), PursuitAction::Thrust);
    }

    #[test]
    fn test_thrust_at_exact_radius() {
        // Engage test is strict: distance equal to the radius still thrusts.
        let pirate = DVec3::ZERO;
        let ctx = make_context(pirate, 0.0, quarry_at(pirate, 0.0, PIRATE_ENGAGE_RADIUS));
        assert_eq!(decide(&ctx, &PursuitProfile::standard()), PursuitAction::Thrust);
    }

    #[test]
    fn test_steer_inside_engage_radius() {
        let pirate = DVec3::ZERO;
        let ctx = make_context(pirate, 0.0, quarry_at(pirate, 0.0, 50.0));
        assert!(matches!(
            decide(&ctx, &PursuitProfile::standard()),
            PursuitAction::Steer { .. }
        ));
    }

    #[test]
    fn test_steer_turn_clamped_regardless_of_error() {
        // Quarry dead astern: half-turn of error, far past the per-frame cap.
        let pirate = DVec3::ZERO;
        let ctx = make_context(pirate, 0.0, quarry_at(pirate, PI, 50.0));
        match decide(&ctx, &PursuitProfile::standard()) {
            PursuitAction::Steer { turn } => {
                assert!(
                    turn.abs() <= PIRATE_MAX_TURN + 1e-12,
                    "turn {} exceeds the per-frame cap {}",
                    turn,
                    PIRATE_MAX_TURN
                );
                assert!(
                    (turn.abs() - PIRATE_MAX_TURN).abs() < 1e-12,
                    "a half-turn error should saturate the cap, got {}",
                    turn
                );
            }
            other => panic!("expected Steer, got {:?}", other),
        }
    }

    #[test]
    fn test_steer_turns_toward_quarry() {
        // Quarry 90 degrees to port: error is +PI/2, so the turn is positive
        // and saturates the cap.
        let pirate = DVec3::ZERO;
        let ctx = make_context(pirate, 0.0, quarry_at(pirate, FRAC_PI_2, 50.0));
        match decide(&ctx, &PursuitProfile::standard()) {
            PursuitAction::Steer { turn } => {
                assert!(turn > 0.0, "port-side quarry should give a positive turn");
                assert!((turn - PIRATE_MAX_TURN).abs() < 1e-12);
            }
            other => panic!("expected Steer, got {:?}", other),
        }
    }

    #[test]
    fn test_small_error_scaled_by_gain_not_clamped() {
        let pirate = DVec3::ZERO;
        let error = 0.2;
        let ctx = make_context(pirate, 0.0, quarry_at(pirate, error, 50.0));
        match decide(&ctx, &PursuitProfile::standard()) {
            PursuitAction::Steer { turn } => {
                let expected = error * PIRATE_TURN_GAIN;
                assert!(
                    (turn - expected).abs() < 1e-10,
                    "expected gain-scaled turn {}, got {}",
                    expected,
                    turn
                );
            }
            other => panic!("expected Steer, got {:?}", other),
        }
    }

    #[test]
    fn test_steer_takes_shortest_way_through_seam() {
        // Pirate heading +3.0 rad, quarry at bearing -3.0 rad: the short way
        // is onward through the PI seam (positive error ~0.28), not a near
        // full turn back.
        let pirate = DVec3::ZERO;
        let ctx = make_context(pirate, 3.0, quarry_at(pirate, -3.0, 50.0));
        match decide(&ctx, &PursuitProfile::standard()) {
            PursuitAction::Steer { turn } => {
                assert!(
                    turn > 0.0,
                    "seam crossing should keep turning positive, got {}",
                    turn
                );
            }
            other => panic!("expected Steer, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_error_zero_turn() {
        let pirate = DVec3::ZERO;
        let bearing = 1.2;
        let ctx = make_context(pirate, bearing, quarry_at(pirate, bearing, 30.0));
        match decide(&ctx, &PursuitProfile::standard()) {
            PursuitAction::Steer { turn } => {
                assert!(turn.abs() < 1e-10, "aligned pirate should hold course");
            }
            other => panic!("expected Steer, got {:?}", other),
        }
    }

    #[test]
    fn test_vertical_offset_ignored() {
        // 50 units away in the plane but 500 above: still engaged.
        let pirate = DVec3::new(0.0, 13.0, 0.0);
        let mut quarry = quarry_at(pirate, 0.0, 50.0);
        quarry.y = 513.0;
        let ctx = make_context(pirate, 0.0, quarry);
        assert!(matches!(
            decide(&ctx, &PursuitProfile::standard()),
            PursuitAction::Steer { .. }
        ));
    }

    #[test]
    fn test_standard_profile_matches_constants() {
        let profile = PursuitProfile::standard();
        assert_eq!(profile.engage_radius, PIRATE_ENGAGE_RADIUS);
        assert_eq!(profile.turn_gain, PIRATE_TURN_GAIN);
        assert_eq!(profile.max_turn, PIRATE_MAX_TURN);
    }
}
