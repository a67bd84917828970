//! Render-side snapshots, safe to hand across threads.

use std::sync::{Arc, PoisonError, RwLock};

use crate::board::Ball;
use crate::simulation::Holding;

/// Everything a renderer reads, copied out of the simulation after a tick.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Frame {
    pub tick: u64,
    pub width: f64,
    pub height: f64,
    pub balls: Vec<Ball>,
    pub holding: Option<Holding>,
}

/// Latest published [`Frame`]. The tick thread publishes whole frames, so a
/// reader never sees a ball half-updated.
#[derive(Clone, Debug, Default)]
pub struct FrameBuffer {
    inner: Arc<RwLock<Frame>>,
}

impl FrameBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn publish(&self, frame: Frame) {
        *self.inner.write().unwrap_or_else(PoisonError::into_inner) = frame;
    }

    pub fn latest(&self) -> Frame {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
