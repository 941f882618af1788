#![forbid(unsafe_code)]

//! Hover/lock/path-hover state machine.
//!
//! Focus moves through three states: idle (no hover, no lock), hovering a
//! token, and locked to a token. Locking pins the focus: pointer movement
//! over tokens is ignored until the locked token is clicked again. While
//! locked, individual paths can be hovered for tooltip inspection; leaving
//! a path starts the debounce in [`crate::debounce`] instead of clearing
//! immediately.
//!
//! Every transition is a total function over the current state; a stale or
//! out-of-range index degrades to a no-op upstream.

use std::time::{Duration, Instant};
use tracing::debug;

use crate::debounce::DebounceTimer;

/// Current hover and lock assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FocusState {
    /// Token under the pointer, if any.
    pub hovered: Option<usize>,
    /// User-pinned token, if any. Takes priority over `hovered`.
    pub locked: Option<usize>,
}

impl FocusState {
    /// The token edge selection centers on: locked wins over hovered.
    #[must_use]
    pub fn active(&self) -> Option<usize> {
        self.locked.or(self.hovered)
    }
}

/// Emitted when the lock assignment changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockChange {
    /// The newly locked token, or `None` after an unlock.
    pub locked: Option<usize>,
}

/// Result of a path-hover switch: which flags to flip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathHoverChange {
    /// Previously hovered path, if any.
    pub previous: Option<usize>,
    /// Newly hovered path.
    pub current: usize,
}

/// The interaction state machine.
#[derive(Debug, Clone)]
pub struct InteractionState {
    focus: FocusState,
    hovered_path: Option<usize>,
    debounce: DebounceTimer,
}

impl InteractionState {
    #[must_use]
    pub fn new(hover_end_delay: Duration) -> Self {
        Self {
            focus: FocusState::default(),
            hovered_path: None,
            debounce: DebounceTimer::new(hover_end_delay),
        }
    }

    #[must_use]
    pub fn focus(&self) -> FocusState {
        self.focus
    }

    /// The token edge selection should center on.
    #[must_use]
    pub fn active(&self) -> Option<usize> {
        self.focus.active()
    }

    /// The path currently hovered for tooltip display.
    #[must_use]
    pub fn hovered_path(&self) -> Option<usize> {
        self.hovered_path
    }

    /// Pointer entered a token. Returns true when the active focus changed
    /// (the caller reselects edges). Ignored entirely while locked.
    pub fn pointer_enter_token(&mut self, index: usize) -> bool {
        if self.focus.locked.is_some() || self.focus.hovered == Some(index) {
            return false;
        }
        self.focus.hovered = Some(index);
        true
    }

    /// Pointer left all tokens. Returns true when the active focus changed.
    pub fn pointer_leave_tokens(&mut self) -> bool {
        if self.focus.locked.is_some() || self.focus.hovered.is_none() {
            return false;
        }
        self.focus.hovered = None;
        true
    }

    /// A token was clicked: lock it, or unlock if it already holds the
    /// lock. Always changes the lock assignment and drops any path hover,
    /// since the edge list is rebuilt around the new focus.
    pub fn click_token(&mut self, index: usize) -> LockChange {
        if self.focus.locked == Some(index) {
            self.focus.locked = None;
            self.focus.hovered = None;
        } else {
            self.focus.locked = Some(index);
            self.focus.hovered = Some(index);
        }
        self.clear_path_hover();
        debug!(locked = ?self.focus.locked, "lock changed");
        LockChange {
            locked: self.focus.locked,
        }
    }

    /// Pointer entered a path. Only honored while locked; switching from
    /// another path happens immediately, with no intermediate idle tick.
    pub fn enter_path(&mut self, index: usize) -> Option<PathHoverChange> {
        self.debounce.cancel();
        if self.focus.locked.is_none() || self.hovered_path == Some(index) {
            return None;
        }
        let previous = self.hovered_path.replace(index);
        Some(PathHoverChange {
            previous,
            current: index,
        })
    }

    /// Pointer left all paths: start the hover-exit debounce.
    pub fn leave_path(&mut self, now: Instant) {
        if self.hovered_path.is_some() {
            self.debounce.arm(now);
        }
    }

    /// Advance time. Returns the path whose hover just expired, if the
    /// debounce fired.
    pub fn tick(&mut self, now: Instant) -> Option<usize> {
        if self.debounce.fire_due(now) {
            return self.hovered_path.take();
        }
        None
    }

    /// Drop path-hover state without waiting for the debounce (edge lists
    /// are being rebuilt). Returns the previously hovered path.
    pub fn clear_path_hover(&mut self) -> Option<usize> {
        self.debounce.cancel();
        self.hovered_path.take()
    }

    /// Forget everything; used when a new analysis replaces the data.
    pub fn reset(&mut self) {
        self.focus = FocusState::default();
        self.clear_path_hover();
    }
}
