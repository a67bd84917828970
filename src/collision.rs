//! Per sub-step contact response: ball against ball, ball against wall.
//!
//! Both work on the displacement a ball would travel this sub-step
//! (`velocity * dt`) and turn the adjusted displacement back into a
//! velocity at the end, so friction lands before the division by `dt`.

use glam::DVec2;

use crate::board::{Bounds, Wall};
use crate::config::PhysicsConfig;
use crate::vector::Polar;

/// A ball as the collision step sees it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Moving {
    pub position: DVec2,
    pub velocity: DVec2,
    pub radius: f64,
}

/// Returns vf1 and vf2 respectively, or `None` when the projected discs
/// stay apart.
///
/// The push is a tuned heuristic: its strength is `collision_power` times
/// the summed absolute displacement components, applied along the line
/// between the projected centres. A pair that overlaps at rest gets no push.
pub fn process_collision(
    b1: Moving,
    b2: Moving,
    dt: f64,
    config: &PhysicsConfig,
) -> Option<(DVec2, DVec2)> {
    let s1 = b1.velocity * dt;
    let s2 = b2.velocity * dt;

    let p1 = b1.position + s1;
    let p2 = b2.position + s2;

    // NaN distances fall through here too.
    if !(p1.distance(p2) < b1.radius + b2.radius) {
        return None;
    }

    let rotation = p1.heading_to(p2);
    let power = config.collision_power * (s1.abs().element_sum() + s2.abs().element_sum());

    let bounce1 = DVec2::speed(rotation + 180.0, power);
    let bounce2 = DVec2::speed(rotation, power);

    Some((
        (s1 + bounce1) * config.friction_on_collision / dt,
        (s2 + bounce2) * config.friction_on_collision / dt,
    ))
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Movement {
    pub position: DVec2,
    pub velocity: DVec2,
    /// Wall the unshrunk move would have crossed.
    pub wall: Option<Wall>,
}

/// Advances one ball by `velocity * dt`, bouncing off the first violated wall.
///
/// On a violation the displacement is shrunk by `friction_on_move` until the
/// ball fits or the displacement drops under `float_accuracy`; the shrink is
/// also capped by `max_shrink_iterations`. If the ball still does not fit it
/// stays where it was. The perpendicular velocity component flips and both
/// components are damped by `friction_on_collision`.
pub fn move_within_bounds(
    ball: Moving,
    bounds: &Bounds,
    dt: f64,
    config: &PhysicsConfig,
) -> Movement {
    let step = ball.velocity * dt;

    if !step.is_finite() {
        return Movement {
            position: ball.position,
            velocity: DVec2::ZERO,
            wall: None,
        };
    }

    let target = ball.position + step;
    let Some(wall) = bounds.check_outside(target, ball.radius) else {
        return Movement {
            position: target,
            velocity: step * config.friction_on_move / dt,
            wall: None,
        };
    };

    let mut shrunk = step * config.friction_on_move;
    let mut iterations = 0;
    while bounds.check_outside(ball.position + shrunk, ball.radius).is_some()
        && shrunk.length() > config.float_accuracy
        && iterations < config.max_shrink_iterations
    {
        shrunk *= config.friction_on_move;
        iterations += 1;
    }

    let mut position = ball.position + shrunk;
    if bounds.check_outside(position, ball.radius).is_some()
        && bounds.check_outside(ball.position, ball.radius).is_none()
    {
        position = ball.position;
    }

    let bounce = match wall {
        Wall::Left | Wall::Right => DVec2::new(-1.0, 1.0),
        Wall::Top | Wall::Bottom => DVec2::new(1.0, -1.0),
    };

    Movement {
        position,
        velocity: step * bounce * config.friction_on_collision / dt,
        wall: Some(wall),
    }
}
