use legion::world::SubWorld;
use legion::*;
use log::trace;

use crate::board::Bounds;
use crate::collision::{self, Moving};
use crate::components::*;
use crate::config::PhysicsConfig;

/// Length of one sub-iteration, refreshed every `update`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SubStep(pub f64);

/// One sub-iteration: every pair collides first, then every ball moves.
pub fn physics_schedule() -> Schedule {
    Schedule::builder()
        .add_system(handle_collisions_system())
        .add_system(move_balls_system())
        .build()
}

#[system]
pub fn handle_collisions(
    world: &mut SubWorld,
    query: &mut Query<(&Position, &ShapeInfo, &mut Velocity)>,
    #[resource] step: &SubStep,
    #[resource] config: &PhysicsConfig,
) {
    let mut balls = query.iter_mut(world).collect::<Vec<_>>();

    for i in 0..balls.len() {
        for j in (i + 1)..balls.len() {
            let (head, tail) = balls.split_at_mut(j);
            let (pos1, shape1, vel1) = &mut head[i];
            let (pos2, shape2, vel2) = &mut tail[0];

            let b1 = Moving {
                position: pos1.0,
                velocity: vel1.0,
                radius: shape1.radius,
            };
            let b2 = Moving {
                position: pos2.0,
                velocity: vel2.0,
                radius: shape2.radius,
            };

            if let Some((new_vel1, new_vel2)) = collision::process_collision(b1, b2, step.0, config)
            {
                vel1.0 = new_vel1;
                vel2.0 = new_vel2;
            }
        }
    }
}

#[system(for_each)]
pub fn move_balls(
    id: &BallId,
    pos: &mut Position,
    vel: &mut Velocity,
    shape: &ShapeInfo,
    #[resource] bounds: &Bounds,
    #[resource] step: &SubStep,
    #[resource] config: &PhysicsConfig,
) {
    let moved = collision::move_within_bounds(
        Moving {
            position: pos.0,
            velocity: vel.0,
            radius: shape.radius,
        },
        bounds,
        step.0,
        config,
    );

    if let Some(wall) = moved.wall {
        trace!("ball {} bounced off {:?} wall", id.0, wall);
    }

    pos.0 = moved.position;
    vel.0 = moved.velocity;
}
