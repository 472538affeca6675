//! Plain data row types written by output backends.

use mz_core::MotionAction;

/// The visible pose at the end of one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoseRow {
    pub frame:        u64,
    pub elapsed_secs: f64,
    pub x:            f32,
    pub z:            f32,
    pub angle:        f32,
    /// Action being animated; `None` while idle.
    pub action:       Option<MotionAction>,
    /// Animation progress in `[0, 1]`; 1 while idle.
    pub progress:     f32,
}

/// One accepted decision and the look-ahead it was made against.
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionRow {
    pub frame:              u64,
    pub cycle:              u32,
    /// Wire symbol, including `stop`.
    pub action:             &'static str,
    pub thought:            String,
    pub forward_blocked:    bool,
    pub turn_left_blocked:  bool,
    pub turn_right_blocked: bool,
}

/// One finished discrete action.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompletionRow {
    pub frame:   u64,
    pub seq:     u64,
    pub action:  MotionAction,
    pub blocked: bool,
    pub x:       f32,
    pub z:       f32,
    pub angle:   f32,
}
