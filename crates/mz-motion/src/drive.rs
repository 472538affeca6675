//! Continuous-drive intents.

/// Four independent held-key style intents, sampled once per frame.
///
/// Only consulted while the controller is idle with an empty queue.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DriveInput {
    pub forward:    bool,
    pub backward:   bool,
    pub turn_left:  bool,
    pub turn_right: bool,
}

impl DriveInput {
    /// No intents held.
    pub const NONE: DriveInput = DriveInput {
        forward:    false,
        backward:   false,
        turn_left:  false,
        turn_right: false,
    };

    pub fn forward() -> Self {
        DriveInput { forward: true, ..Self::NONE }
    }

    pub fn backward() -> Self {
        DriveInput { backward: true, ..Self::NONE }
    }

    pub fn turn_left() -> Self {
        DriveInput { turn_left: true, ..Self::NONE }
    }

    pub fn turn_right() -> Self {
        DriveInput { turn_right: true, ..Self::NONE }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        !(self.forward || self.backward || self.turn_left || self.turn_right)
    }
}
