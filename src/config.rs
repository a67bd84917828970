//! Tuning knobs for the physics step and the randomized scenario.
//!
//! The defaults are the values the toy was tuned with; both types
//! deserialize with missing fields falling back to those defaults, so a
//! frontend can ship a partial JSON override.

use serde::{Deserialize, Serialize};

use crate::components::Color;
use crate::error::Error;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Equal slices every `update` delta is divided into.
    pub sub_iterations: usize,
    /// Velocity decay applied on every free move.
    pub friction_on_move: f64,
    /// Damping applied on ball-ball and ball-wall contact.
    pub friction_on_collision: f64,
    /// Displacement floor at which the wall shrink loop gives up.
    pub float_accuracy: f64,
    /// Scale of the separating impulse relative to the summed displacement.
    pub collision_power: f64,
    /// Pointer travel (units) above which a hold counts as a drag.
    pub drag_threshold: f64,
    /// Multiplier applied to `velocity + drag` on release.
    pub launch_scale: f64,
    /// Hard cap on wall shrink iterations, independent of `float_accuracy`.
    pub max_shrink_iterations: usize,
}

impl PhysicsConfig {
    pub fn new() -> Self {
        Self {
            sub_iterations: 4,
            friction_on_move: 0.995,
            friction_on_collision: 0.97,
            float_accuracy: 0.01,
            collision_power: 0.12,
            drag_threshold: 2.0,
            launch_scale: 0.4,
            max_shrink_iterations: 10_000,
        }
    }

    pub fn with_sub_iterations(mut self, sub_iterations: usize) -> Self {
        self.sub_iterations = sub_iterations.max(1);
        self
    }

    pub fn with_friction_on_move(mut self, friction: f64) -> Self {
        self.friction_on_move = friction;
        self
    }

    pub fn with_friction_on_collision(mut self, friction: f64) -> Self {
        self.friction_on_collision = friction;
        self
    }

    pub fn with_collision_power(mut self, power: f64) -> Self {
        self.collision_power = power;
        self
    }

    pub fn with_drag_threshold(mut self, threshold: f64) -> Self {
        self.drag_threshold = threshold;
        self
    }

    pub fn with_launch_scale(mut self, scale: f64) -> Self {
        self.launch_scale = scale;
        self
    }

    pub fn with_float_accuracy(mut self, accuracy: f64) -> Self {
        self.float_accuracy = accuracy;
        self
    }

    pub fn with_max_shrink_iterations(mut self, iterations: usize) -> Self {
        self.max_shrink_iterations = iterations;
        self
    }
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Parameters of the randomized starting layout.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    pub min_balls: usize,
    pub max_balls: usize,
    /// Integer radii are drawn from `min_radius..max_radius`.
    pub min_radius: u32,
    pub max_radius: u32,
    /// Launch speed is drawn from `min_speed..max_speed` in a random direction.
    pub min_speed: f64,
    pub max_speed: f64,
    pub palette: Vec<Color>,
    /// Rejection-sampling attempts per ball before it is skipped.
    pub placement_attempts: usize,
}

impl ScenarioConfig {
    pub fn validate(&self) -> Result<(), Error> {
        if self.min_balls > self.max_balls {
            return Err(Error::InvalidScenario("min_balls exceeds max_balls"));
        }
        if self.min_radius == 0 || self.min_radius >= self.max_radius {
            return Err(Error::InvalidScenario(
                "radius range must be non-empty and positive",
            ));
        }
        if !(self.min_speed < self.max_speed) {
            return Err(Error::InvalidScenario("speed range must be non-empty"));
        }
        if self.palette.is_empty() {
            return Err(Error::InvalidScenario("palette must not be empty"));
        }
        Ok(())
    }
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            min_balls: 3,
            max_balls: 6,
            min_radius: 32,
            max_radius: 64,
            min_speed: 2.0,
            max_speed: 14.0,
            palette: Color::PALETTE.to_vec(),
            placement_attempts: 1_000,
        }
    }
}
