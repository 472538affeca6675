//! `mz-motion` — the agent's motion state machine.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                        |
//! |----------------|-----------------------------------------------------------------|
//! | [`state`]      | `MotionPhase`: `Idle` or `Animating { action, progress, .. }`   |
//! | [`queue`]      | `ActionQueue`: FIFO of pending discrete actions                 |
//! | [`drive`]      | `DriveInput`: the four continuous-drive intents                 |
//! | [`kinematics`] | Full-step and interpolated poses for a discrete action          |
//! | [`channel`]    | `ActionHandle`, `Completion`, `Submission`                      |
//! | [`controller`] | `MotionController`: one `tick` per frame                        |
//! | [`error`]      | `MotionError`, `MotionResult<T>`                                |
//!
//! # Tick model
//!
//! Each frame the owner calls [`MotionController::tick`] with the elapsed
//! seconds:
//!
//! 1. Actions sent through the [`ActionHandle`] since the last tick move into
//!    the queue.
//! 2. If idle and the queue is non-empty, the head is dequeued and the
//!    committed pose is snapshotted.  Otherwise an idle controller applies
//!    the continuous-drive intents.
//! 3. An animating controller advances `progress` by `dt * animation_rate`
//!    (clamped to 1) and interpolates the visible pose from the snapshot.
//! 4. At `progress == 1` the terminal pose is committed, or rolled back if a
//!    forward step's target collides, and exactly one [`Completion`] is sent.
//!
//! At most one discrete action is ever in flight and no in-flight action can
//! be cancelled.

pub mod channel;
pub mod controller;
pub mod drive;
pub mod error;
pub mod kinematics;
pub mod queue;
pub mod state;


pub use channel::{ActionHandle, Completion, Submission};
pub use controller::{MotionController, TickReport};
pub use drive::DriveInput;
pub use error::{MotionError, MotionResult};
pub use queue::ActionQueue;
pub use state::MotionPhase;
