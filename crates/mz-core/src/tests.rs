//! Unit tests for mz-core primitives.

#[cfg(test)]
mod geo {
    use crate::{GridPos, Point};

    #[test]
    fn grid_center_scales_by_cell_size() {
        assert_eq!(GridPos::new(6, 5).center(2.0), Point::new(12.0, 10.0));
        assert_eq!(GridPos::new(0, 0).center(2.0), Point::new(0.0, 0.0));
    }

    #[test]
    fn offset_saturates_at_the_limits() {
        let edge = Point::new(1.0e12, -1.0e12).to_grid(2.0);
        assert_eq!(edge, GridPos::new(i32::MAX, i32::MIN));
        assert_eq!(edge.offset(1, -1), edge);
        assert_eq!(edge.neighborhood().count(), 9);
        assert_eq!(GridPos::new(3, 4).offset(-1, 2), GridPos::new(2, 6));
    }

    #[test]
    fn to_grid_rounds_to_nearest_cell() {
        assert_eq!(Point::new(12.0, 10.0).to_grid(2.0), GridPos::new(6, 5));
        assert_eq!(Point::new(12.9, 9.1).to_grid(2.0), GridPos::new(6, 5));
        assert_eq!(Point::new(13.1, 8.9).to_grid(2.0), GridPos::new(7, 4));
    }

    #[test]
    fn neighborhood_is_three_by_three() {
        let cells: Vec<_> = GridPos::new(0, 0).neighborhood().collect();
        assert_eq!(cells.len(), 9);
        assert_eq!(cells[0], GridPos::new(-1, -1));
        assert_eq!(cells[4], GridPos::new(0, 0));
        assert_eq!(cells[8], GridPos::new(1, 1));
    }

    #[test]
    fn distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(a.distance_sq(b), 25.0);
        assert_eq!(a.distance(b), 5.0);
    }

    #[test]
    fn display() {
        assert_eq!(GridPos::new(6, 5).to_string(), "(6, 5)");
    }
}

#[cfg(test)]
mod pose {
    use std::f32::consts::{FRAC_PI_2, PI, TAU};

    use crate::{AgentState, GridPos, Point, normalize_angle};

    #[test]
    fn normalize_wraps_negative() {
        assert!((normalize_angle(-FRAC_PI_2) - 3.0 * FRAC_PI_2).abs() < 1e-5);
        assert!((normalize_angle(TAU + 0.25) - 0.25).abs() < 1e-5);
        assert_eq!(normalize_angle(0.0), 0.0);
    }

    #[test]
    fn normalize_never_returns_tau() {
        let r = normalize_angle(-1e-9);
        assert!((0.0..TAU).contains(&r), "got {r}");
    }

    #[test]
    fn forward_at_zero_faces_negative_z() {
        let s = AgentState::new(Point::default(), 0.0);
        assert!(s.forward().approx_eq(Point::new(0.0, -1.0), 1e-6));
    }

    #[test]
    fn forward_after_left_turn_faces_negative_x() {
        let s = AgentState::new(Point::default(), FRAC_PI_2);
        assert!(s.forward().approx_eq(Point::new(-1.0, 0.0), 1e-6));
        let s = AgentState::new(Point::default(), -FRAC_PI_2);
        assert!(s.forward().approx_eq(Point::new(1.0, 0.0), 1e-6));
    }

    #[test]
    fn at_cell_and_back() {
        let s = AgentState::at_cell(GridPos::new(3, 2), 2.0, PI);
        assert_eq!(s.position, Point::new(6.0, 4.0));
        assert_eq!(s.cell(2.0), GridPos::new(3, 2));
    }

    #[test]
    fn approx_eq_is_modulo_tau() {
        let a = AgentState::new(Point::new(1.0, 1.0), FRAC_PI_2);
        let b = AgentState::new(Point::new(1.0, 1.0), FRAC_PI_2 + TAU);
        assert!(a.approx_eq(&b, 1e-4));
        let c = AgentState::new(Point::new(1.0, 1.0), 0.0);
        assert!(!a.approx_eq(&c, 1e-4));
    }
}

#[cfg(test)]
mod action {
    use crate::{Action, MotionAction, NavError};

    #[test]
    fn parse_all_symbols() {
        assert_eq!("move_forward".parse::<Action>().unwrap(), Action::MoveForward);
        assert_eq!("turn_left".parse::<Action>().unwrap(), Action::TurnLeft);
        assert_eq!("turn_right".parse::<Action>().unwrap(), Action::TurnRight);
        assert_eq!(" stop ".parse::<Action>().unwrap(), Action::Stop);
    }

    #[test]
    fn unknown_symbol_is_rejected() {
        let err = "jump".parse::<Action>().unwrap_err();
        assert!(matches!(err, NavError::UnknownAction(ref s) if s == "jump"));
    }

    #[test]
    fn stop_is_not_a_motion() {
        assert_eq!(Action::Stop.as_motion(), None);
        assert_eq!(Action::TurnLeft.as_motion(), Some(MotionAction::TurnLeft));
    }

    #[test]
    fn motion_round_trips_to_action() {
        for m in MotionAction::ALL {
            assert_eq!(Action::from(m).as_motion(), Some(m));
        }
    }

    #[test]
    fn display() {
        assert_eq!(Action::MoveForward.to_string(), "move_forward");
        assert_eq!(MotionAction::TurnRight.to_string(), "turn_right");
    }
}

#[cfg(test)]
mod config {
    use crate::NavConfig;

    #[test]
    fn default_is_valid() {
        let cfg = NavConfig::default();
        cfg.validate().unwrap();
        assert_eq!(cfg.cell_size, 2.0);
        assert_eq!(cfg.agent_radius, 0.4);
        assert!((cfg.step_duration_secs() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn radius_must_fit_collision_window() {
        let cfg = NavConfig { agent_radius: 1.0, ..NavConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn non_positive_cell_size_rejected() {
        let cfg = NavConfig { cell_size: 0.0, ..NavConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn nan_speed_rejected() {
        let cfg = NavConfig { move_speed: f32::NAN, ..NavConfig::default() };
        assert!(cfg.validate().is_err());
    }
}

#[cfg(test)]
mod time {
    use crate::{Frame, FrameClock};

    #[test]
    fn clock_accumulates_deltas() {
        let mut clock = FrameClock::new();
        clock.advance(0.25);
        clock.advance(0.5);
        assert_eq!(clock.current_frame, Frame(2));
        assert!((clock.elapsed_secs - 0.75).abs() < 1e-9);
    }

    #[test]
    fn negative_delta_counts_as_zero() {
        let mut clock = FrameClock::new();
        clock.advance(-1.0);
        clock.advance(f32::NAN);
        assert_eq!(clock.current_frame, Frame(2));
        assert_eq!(clock.elapsed_secs, 0.0);
    }

    #[test]
    fn frame_arithmetic() {
        assert_eq!(Frame(3) + 2, Frame(5));
        assert_eq!(Frame(5).since(Frame(3)), 2);
        assert_eq!(Frame(7).to_string(), "F7");
    }
}

#[cfg(test)]
mod rng {
    use crate::PolicyRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = PolicyRng::new(12345);
        let mut r2 = PolicyRng::new(12345);
        for _ in 0..100 {
            assert_eq!(r1.gen_range(0..1000u32), r2.gen_range(0..1000u32));
        }
    }

    #[test]
    fn choose_empty_is_none() {
        let mut rng = PolicyRng::new(0);
        let empty: [u8; 0] = [];
        assert!(rng.choose(&empty).is_none());
        assert_eq!(rng.choose(&[7]), Some(&7));
    }
}
