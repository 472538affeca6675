//! Unit tests for mz-lookahead.

use std::f32::consts::{FRAC_PI_2, PI};

use mz_core::{Action, AgentState, GridPos, MotionAction, NavConfig, Point};
use mz_grid::GridMap;
use mz_motion::{DriveInput, MotionController};

use crate::{LookaheadError, simulate, simulate_controller};

const EPS: f32 = 1e-4;

fn at(x: i32, z: i32, angle: f32) -> AgentState {
    AgentState::at_cell(GridPos::new(x, z), 2.0, angle)
}

#[cfg(test)]
mod outcomes {
    use super::*;

    #[test]
    fn start_cell_facing_north() {
        let map = GridMap::reference();
        let cfg = NavConfig::default();
        let set = simulate(&at(6, 5, 0.0), &map, &cfg);

        assert!(!set.forward.blocked);
        assert!(set.forward.state.position.approx_eq(Point::new(12.0, 8.0), EPS));
        assert!((set.turn_left.state.angle - FRAC_PI_2).abs() < EPS);
        assert!((set.turn_right.state.angle + FRAC_PI_2).abs() < EPS);
        assert_eq!(set.turn_left.state.position, at(6, 5, 0.0).position);
    }

    #[test]
    fn blocked_forward_reports_start_pose() {
        let map = GridMap::reference();
        let cfg = NavConfig::default();
        let start = at(6, 5, -FRAC_PI_2);
        let set = simulate(&start, &map, &cfg);
        assert!(set.forward.blocked);
        assert_eq!(set.forward.state, start);
    }

    #[test]
    fn turns_never_blocked() {
        let map = GridMap::reference();
        let cfg = NavConfig::default();
        // Dead end (6, 1): walls north, east and south.
        for angle in [0.0, FRAC_PI_2, PI, -FRAC_PI_2] {
            let set = simulate(&at(6, 1, angle), &map, &cfg);
            assert!(!set.turn_left.blocked);
            assert!(!set.turn_right.blocked);
        }
    }

    #[test]
    fn wall_ahead_with_open_turn() {
        let map = GridMap::reference();
        let cfg = NavConfig::default();
        // (6, 1) facing south: wall ahead, the only opening is to the west.
        let start = at(6, 1, PI);
        let set = simulate(&start, &map, &cfg);

        for o in set.iter() {
            let target = mz_motion::kinematics::terminal(&start, o.action, &cfg);
            let expect = o.action.is_translation() && map.collides(target.position, cfg.agent_radius);
            assert_eq!(o.blocked, expect, "{}", o.action);
        }
        assert!(set.forward.blocked);
        assert_eq!(set.open_actions().collect::<Vec<_>>(), vec![MotionAction::TurnLeft, MotionAction::TurnRight]);

        // Stepping forward after each candidate: only the right turn faces open floor.
        let follow_ups: Vec<bool> = set
            .iter()
            .map(|o| simulate(&o.state, &map, &cfg).forward.blocked)
            .collect();
        assert_eq!(follow_ups, vec![true, true, false]);
        let after_right = simulate(&set.turn_right.state, &map, &cfg).forward;
        assert_eq!(after_right.state.cell(2.0), GridPos::new(5, 1));
    }

    #[test]
    fn get_matches_fields() {
        let map = GridMap::reference();
        let set = simulate(&at(3, 3, 0.0), &map, &NavConfig::default());
        for action in MotionAction::ALL {
            assert_eq!(set.get(action).action, action);
        }
        assert_eq!(set.iter().count(), 3);
    }
}

#[cfg(test)]
mod purity {
    use super::*;

    #[test]
    fn repeated_calls_are_identical_and_leave_map_untouched() {
        let mut map = GridMap::reference();
        map.mark_visited(GridPos::new(5, 5));
        let cfg   = NavConfig::default();
        let state = at(5, 5, 0.7);

        let first  = simulate(&state, &map, &cfg);
        let second = simulate(&state, &map, &cfg);
        assert_eq!(first, second);
        assert_eq!(map.visited().len(), 1);
        assert_eq!(state, at(5, 5, 0.7));
    }

    #[test]
    fn controller_lookahead_does_not_move_agent() {
        let map = GridMap::reference();
        let (c, _handle) = MotionController::new(NavConfig::default(), at(6, 5, 0.0)).unwrap();
        let before = c.committed();
        let set = simulate_controller(&c, &map).unwrap();
        assert!(!set.forward.blocked);
        assert_eq!(c.committed(), before);
        assert!(c.is_idle());
    }

    #[test]
    fn prediction_matches_commit() {
        let map = GridMap::reference();
        let (mut c, handle) = MotionController::new(NavConfig::default(), at(6, 5, 0.0)).unwrap();
        let predicted = simulate_controller(&c, &map).unwrap().forward;
        handle.submit(Action::MoveForward).unwrap();
        let done = c.tick(1.0, &DriveInput::NONE, &map).completion.unwrap();
        assert_eq!(done.blocked, predicted.blocked);
        assert!(done.state.approx_eq(&predicted.state, EPS));
    }

    #[test]
    fn animating_controller_rejected() {
        let map = GridMap::reference();
        let (mut c, handle) = MotionController::new(NavConfig::default(), at(6, 5, 0.0)).unwrap();
        handle.submit(Action::TurnLeft).unwrap();
        c.tick(0.1, &DriveInput::NONE, &map);
        let err = simulate_controller(&c, &map).unwrap_err();
        assert!(matches!(err, LookaheadError::Animating { action: MotionAction::TurnLeft, .. }));
    }

    #[test]
    fn idle_controller_with_queue_rejected() {
        let map = GridMap::reference();
        let (mut c, handle) = MotionController::new(NavConfig::default(), at(6, 5, 0.0)).unwrap();
        c.enqueue(MotionAction::TurnLeft);
        assert!(c.is_idle());
        let err = simulate_controller(&c, &map).unwrap_err();
        assert!(matches!(err, LookaheadError::Queued { pending: 1 }));

        // First action lands; the second is still waiting.
        handle.submit(Action::MoveForward).unwrap();
        assert!(c.tick(1.0, &DriveInput::NONE, &map).completion.is_some());
        assert!(c.is_idle());
        assert!(matches!(simulate_controller(&c, &map), Err(LookaheadError::Queued { pending: 1 })));

        c.tick(1.0, &DriveInput::NONE, &map);
        assert!(simulate_controller(&c, &map).is_ok());
    }
}
