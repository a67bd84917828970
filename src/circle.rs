use glam::DVec2;

use crate::error::Error;

/// Immutable disc. Both overlap tests are strict: touching is not inside.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    center: DVec2,
    radius: f64,
}

impl Circle {
    pub fn new(center: DVec2, radius: f64) -> Result<Self, Error> {
        if !(radius > 0.0 && radius.is_finite()) {
            return Err(Error::InvalidRadius(radius));
        }
        Ok(Self { center, radius })
    }

    /// Caller guarantees `radius` was validated already.
    pub(crate) fn new_unchecked(center: DVec2, radius: f64) -> Self {
        Self { center, radius }
    }

    pub fn center(&self) -> DVec2 {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn contains_point(&self, point: DVec2) -> bool {
        self.center.distance(point) < self.radius
    }

    pub fn overlaps(&self, other: &Circle) -> bool {
        self.center.distance(other.center) < self.radius + other.radius
    }
}
