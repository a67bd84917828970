//! Random starting layout: a handful of non-overlapping balls drifting in
//! random directions.

use glam::DVec2;
use log::{debug, warn};
use rand::Rng;
use rand::seq::SliceRandom;

use crate::board::Board;
use crate::circle::Circle;
use crate::components::Color;
use crate::config::ScenarioConfig;
use crate::error::Error;
use crate::vector::Polar;

/// Adds a random number of balls to `board` and returns how many were placed.
///
/// A ball that finds no free spot within `placement_attempts` tries is
/// skipped rather than forced into an overlap.
pub fn populate<R: Rng + ?Sized>(
    board: &mut Board,
    scenario: &ScenarioConfig,
    rng: &mut R,
) -> Result<usize, Error> {
    scenario.validate()?;

    let largest = f64::from(scenario.max_radius);
    if board.width() <= largest * 2.0 || board.height() <= largest * 2.0 {
        return Err(Error::BoardTooSmall {
            width: board.width(),
            height: board.height(),
            radius: largest,
        });
    }

    let count = rng.gen_range(scenario.min_balls..=scenario.max_balls);
    let mut placed = 0;

    for _ in 0..count {
        let radius = f64::from(rng.gen_range(scenario.min_radius..scenario.max_radius));
        let color = scenario.palette.choose(rng).copied().unwrap_or(Color::BLACK);

        let Some(circle) = free_spot(board, radius, scenario.placement_attempts, rng)? else {
            warn!("no free spot for a ball of radius {radius}, skipping it");
            continue;
        };

        let id = board.create_ball(circle, color)?;
        let velocity = DVec2::speed(
            rng.gen_range(0.0..360.0),
            rng.gen_range(scenario.min_speed..scenario.max_speed),
        );
        board.set_velocity(id, velocity);
        placed += 1;
    }

    debug!("scenario placed {placed} of {count} balls");
    Ok(placed)
}

fn free_spot<R: Rng + ?Sized>(
    board: &Board,
    radius: f64,
    attempts: usize,
    rng: &mut R,
) -> Result<Option<Circle>, Error> {
    for _ in 0..attempts {
        let center = DVec2::new(
            radius + rng.r#gen::<f64>() * (board.width() - radius * 2.0),
            radius + rng.r#gen::<f64>() * (board.height() - radius * 2.0),
        );
        let circle = Circle::new(center, radius)?;

        if board.bounds().check_outside(center, radius).is_none()
            && board.find_first_collision_by_circle(&circle).is_none()
        {
            return Ok(Some(circle));
        }
    }

    Ok(None)
}
