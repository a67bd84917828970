//! The bounded table and the balls on it.
//!
//! Balls live as legion entities; callers only ever hold a [`BallId`] and
//! go through the board to read or change a ball. [`Ball`] is a detached
//! copy, so a snapshot taken before [`Board::remove_ball`] stays readable.

use std::collections::HashMap;

use glam::DVec2;
use legion::storage::Component;
use legion::*;
use log::debug;

use crate::circle::Circle;
use crate::components::*;
use crate::error::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Wall {
    Left,
    Right,
    Top,
    Bottom,
}

/// Board extents. Also inserted as a legion resource for the move system.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    /// First wall a disc at `position` would cross, checked left, right,
    /// top, bottom. Left/top use `<`, right/bottom use `>=`, so a disc is
    /// inside when `radius <= x < width - radius` (same for y).
    pub fn check_outside(&self, position: DVec2, radius: f64) -> Option<Wall> {
        if position.x - radius < 0.0 {
            Some(Wall::Left)
        } else if position.x + radius >= self.width {
            Some(Wall::Right)
        } else if position.y - radius < 0.0 {
            Some(Wall::Top)
        } else if position.y + radius >= self.height {
            Some(Wall::Bottom)
        } else {
            None
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ball {
    pub id: BallId,
    pub position: DVec2,
    pub velocity: DVec2,
    pub radius: f64,
    pub color: Color,
}

impl Ball {
    pub fn to_circle(&self) -> Circle {
        Circle::new_unchecked(self.position, self.radius)
    }
}

pub struct Board {
    world: World,
    entities: HashMap<BallId, Entity>,
    next_id: u64,
    bounds: Bounds,
}

impl Board {
    pub fn new(width: f64, height: f64) -> Result<Self, Error> {
        let valid = |v: f64| v > 0.0 && v.is_finite();
        if !valid(width) || !valid(height) {
            return Err(Error::InvalidBoardSize { width, height });
        }

        Ok(Self {
            world: World::default(),
            entities: HashMap::new(),
            next_id: 0,
            bounds: Bounds { width, height },
        })
    }

    pub fn width(&self) -> f64 {
        self.bounds.width
    }

    pub fn height(&self) -> f64 {
        self.bounds.height
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub(crate) fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Registers a resting ball and returns its fresh id. The disc must lie
    /// inside the board as [`Bounds::check_outside`] defines it.
    pub fn create_ball(&mut self, circle: Circle, color: Color) -> Result<BallId, Error> {
        if self
            .bounds
            .check_outside(circle.center(), circle.radius())
            .is_some()
        {
            return Err(Error::OutsideBoard {
                x: circle.center().x,
                y: circle.center().y,
                radius: circle.radius(),
            });
        }

        let id = BallId(self.next_id);
        self.next_id += 1;

        let entity = self.world.push((
            id,
            Position(circle.center()),
            Velocity(DVec2::ZERO),
            ShapeInfo {
                radius: circle.radius(),
                color,
            },
        ));
        self.entities.insert(id, entity);

        debug!(
            "created ball {} at {:?} radius {}",
            id.0,
            circle.center(),
            circle.radius()
        );
        Ok(id)
    }

    /// Returns `false` if the ball was already gone.
    pub fn remove_ball(&mut self, id: BallId) -> bool {
        let removed = self
            .entities
            .remove(&id)
            .is_some_and(|entity| self.world.remove(entity));
        if removed {
            debug!("removed ball {}", id.0);
        }
        removed
    }

    /// Whether the ball is still registered.
    pub fn contains(&self, id: BallId) -> bool {
        self.entities.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn ball(&self, id: BallId) -> Option<Ball> {
        let entry = self.world.entry_ref(*self.entities.get(&id)?).ok()?;
        let position = entry.get_component::<Position>().ok()?.0;
        let velocity = entry.get_component::<Velocity>().ok()?.0;
        let shape = *entry.get_component::<ShapeInfo>().ok()?;

        Some(Ball {
            id,
            position,
            velocity,
            radius: shape.radius,
            color: shape.color,
        })
    }

    /// Snapshot of every ball, ordered by id.
    pub fn balls(&self) -> Vec<Ball> {
        let mut query = <(&BallId, &Position, &Velocity, &ShapeInfo)>::query();
        let mut balls = query
            .iter(&self.world)
            .map(|(id, pos, vel, shape)| Ball {
                id: *id,
                position: pos.0,
                velocity: vel.0,
                radius: shape.radius,
                color: shape.color,
            })
            .collect::<Vec<_>>();

        balls.sort_by_key(|ball| ball.id);
        balls
    }

    pub fn set_position(&mut self, id: BallId, position: DVec2) -> bool {
        self.modify::<Position>(id, |pos| pos.0 = position)
    }

    pub fn set_velocity(&mut self, id: BallId, velocity: DVec2) -> bool {
        self.modify::<Velocity>(id, |vel| vel.0 = velocity)
    }

    pub fn set_color(&mut self, id: BallId, color: Color) -> bool {
        self.modify::<ShapeInfo>(id, |shape| shape.color = color)
    }

    fn modify<T: Component>(&mut self, id: BallId, f: impl FnOnce(&mut T)) -> bool {
        let Some(&entity) = self.entities.get(&id) else {
            return false;
        };
        let Some(mut entry) = self.world.entry(entity) else {
            return false;
        };

        match entry.get_component_mut::<T>() {
            Ok(component) => {
                f(component);
                true
            }
            Err(_) => false,
        }
    }

    pub fn find_first_collision_by_point(&self, point: DVec2) -> Option<BallId> {
        self.find_first(None, |circle| circle.contains_point(point))
    }

    pub fn find_first_collision_by_circle(&self, circle: &Circle) -> Option<BallId> {
        self.find_first(None, |other| other.overlaps(circle))
    }

    /// First other ball overlapping `id`, or `None` if `id` is gone.
    pub fn find_first_collision_by_ball(&self, id: BallId) -> Option<BallId> {
        let ball = self.ball(id)?;
        self.check_collision_ball(&ball, ball.position)
    }

    /// First ball other than `ball` that would overlap it at `position`.
    pub fn check_collision_ball(&self, ball: &Ball, position: DVec2) -> Option<BallId> {
        let circle = Circle::new_unchecked(position, ball.radius);
        self.find_first(Some(ball.id), |other| other.overlaps(&circle))
    }

    /// Wall `ball` would violate at `position`, see [`Bounds::check_outside`].
    pub fn check_outside_game_board(&self, ball: &Ball, position: DVec2) -> Option<Wall> {
        self.bounds.check_outside(position, ball.radius)
    }

    fn find_first(
        &self,
        exclude: Option<BallId>,
        mut hit: impl FnMut(&Circle) -> bool,
    ) -> Option<BallId> {
        let mut query = <(&BallId, &Position, &ShapeInfo)>::query();
        query
            .iter(&self.world)
            .filter(|(id, ..)| Some(**id) != exclude)
            .find(|(_, pos, shape)| hit(&Circle::new_unchecked(pos.0, shape.radius)))
            .map(|(id, ..)| *id)
    }
}
