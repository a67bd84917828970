//! Latched pointer input shared between an event callback path and the
//! tick driver.

use std::sync::{Mutex, PoisonError};

use glam::DVec2;

use crate::simulation::{ClickState, Input};

/// Pointer events write here from any thread; the tick driver calls
/// [`InputLatch::sample`] once per tick.
///
/// Only the latest edge survives until the next sample: a `press` followed
/// by a `release` within one tick leaves just `Released`, so a click shorter
/// than a tick is dropped.
#[derive(Debug, Default)]
pub struct InputLatch {
    state: Mutex<Input>,
}

impl InputLatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&self, x: f64, y: f64) {
        self.lock().pointer = DVec2::new(x, y);
    }

    pub fn press(&self) {
        self.lock().click = ClickState::Pressed;
    }

    pub fn release(&self) {
        self.lock().click = ClickState::Released;
    }

    /// Returns the input for this tick and advances the edges:
    /// `Pressed` becomes `Hold`, `Released` becomes `None`.
    pub fn sample(&self) -> Input {
        let mut state = self.lock();
        let input = *state;
        state.click = match input.click {
            ClickState::Pressed => ClickState::Hold,
            ClickState::Released => ClickState::None,
            other => other,
        };
        input
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Input> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
