//! `ActionQueue` — pending discrete actions, strictly FIFO.

use std::collections::VecDeque;

use mz_core::MotionAction;

/// Ordered actions waiting for the controller to go idle.
///
/// Only motion primitives are ever queued; `stop` is handled by the session
/// before it reaches the controller.
#[derive(Clone, Debug, Default)]
pub struct ActionQueue {
    inner: VecDeque<MotionAction>,
}

impl ActionQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `action` to the back of the queue.
    #[inline]
    pub fn push(&mut self, action: MotionAction) {
        self.inner.push_back(action);
    }

    /// Remove and return the oldest action.
    #[inline]
    pub fn pop(&mut self) -> Option<MotionAction> {
        self.inner.pop_front()
    }

    /// The action that will start next, without removing it.
    pub fn peek(&self) -> Option<MotionAction> {
        self.inner.front().copied()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Drop every pending action.
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = MotionAction> + '_ {
        self.inner.iter().copied()
    }
}

impl Extend<MotionAction> for ActionQueue {
    fn extend<I: IntoIterator<Item = MotionAction>>(&mut self, iter: I) {
        self.inner.extend(iter);
    }
}
