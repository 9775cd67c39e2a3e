//! Selection state shared by the trigger handler and the path stepper.
//!
//! [`Selection`] is the plain data; [`SharedSelection`] wraps it in the one
//! blocking mutex both execution contexts go through, so every read is a
//! whole, untorn snapshot and every write is a single commit.
//!
//! Writers:
//!
//! | Field              | Trigger (idle only) | Stepper |
//! |--------------------|---------------------|---------|
//! | `path`, `active`   | select              | finish  |
//! | `phase`            | reset               | advance |
//! | `tick_count`       | reset               | advance |
//! | `ever_completed`   | reset (tap policy)  | latch   |
//! | `tick_period_ms`   | set                 | -       |
//! | `run`              | bump                | -       |

use core::cell::RefCell;

use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;

use super::PathId;

/// Snapshot of which path is running and where it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    /// Running path, `None` when idle.
    pub path: Option<PathId>,
    /// Advisory step interval recorded at trigger time.
    pub tick_period_ms: u32,
    /// True while a run is in progress; gates new triggers.
    pub active: bool,
    /// Index into the running path's phase table.
    pub phase: usize,
    /// Ticks executed in the current phase.
    pub tick_count: u32,
    /// Set once any run has left the latching phase.
    pub ever_completed: bool,
    /// Bumped on every accepted trigger; lets a commit detect a restart.
    pub run: u32,
}

impl Selection {
    pub const IDLE: Self = Self {
        path: None,
        tick_period_ms: 0,
        active: false,
        phase: 0,
        tick_count: 0,
        ever_completed: false,
        run: 0,
    };

    /// `path` is set exactly when a run is active.
    pub fn is_consistent(&self) -> bool {
        self.path.is_some() == self.active
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self::IDLE
    }
}

/// The single guarded instance passed to both entry points.
pub struct SharedSelection {
    inner: Mutex<CriticalSectionRawMutex, RefCell<Selection>>,
}

impl SharedSelection {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Selection::IDLE)),
        }
    }

    /// Copy out the whole selection.
    pub fn snapshot(&self) -> Selection {
        self.inner.lock(|cell| *cell.borrow())
    }

    /// Mutate the selection under the lock. `f` must not call out to ports.
    pub fn update<R>(&self, f: impl FnOnce(&mut Selection) -> R) -> R {
        self.inner.lock(|cell| f(&mut cell.borrow_mut()))
    }
}

impl Default for SharedSelection {
    fn default() -> Self {
        Self::new()
    }
}
