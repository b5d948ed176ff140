//! Movement systems - speed clamp, friction, integration, and the
//! surface-boundary bounce. Ordered by the schedule: clamp before
//! friction, integration after the resource drain, boundary last.

use bevy_ecs::prelude::*;

use crate::components::*;
use crate::systems::status::GameStatus;
use crate::worldgen::Viewport;

/// Velocity retained along an axis after hitting a surface edge
/// (inelastic bounce, not a wraparound).
const RESTITUTION: f32 = 0.5;

/// System that rescales velocity to the player's cap, preserving direction.
pub fn speed_limit_system(status: Res<GameStatus>, mut query: Query<(&Player, &mut Velocity)>) {
    if status.is_over() {
        return;
    }

    for (player, mut vel) in query.iter_mut() {
        let speed = vel.magnitude();
        if speed > player.max_speed {
            let scale = player.max_speed / speed;
            vel.vx *= scale;
            vel.vy *= scale;
        }
    }
}

/// System that damps velocity by the player's friction factor each frame.
pub fn friction_system(status: Res<GameStatus>, mut query: Query<(&Player, &mut Velocity)>) {
    if status.is_over() {
        return;
    }

    for (player, mut vel) in query.iter_mut() {
        vel.vx *= player.friction;
        vel.vy *= player.friction;
    }
}

/// System that adds velocity to position (fixed per-frame increments,
/// no wall-clock delta).
pub fn integrate_system(
    status: Res<GameStatus>,
    mut query: Query<(&mut Position, &Velocity), With<Player>>,
) {
    if status.is_over() {
        return;
    }

    for (mut pos, vel) in query.iter_mut() {
        pos.x += vel.vx;
        pos.y += vel.vy;
    }
}

/// System that keeps the player disc inside the surface: positions are
/// clamped to the edge and the crossing velocity component is inverted
/// scaled by the restitution factor.
pub fn boundary_system(
    status: Res<GameStatus>,
    viewport: Res<Viewport>,
    mut query: Query<(&Player, &mut Position, &mut Velocity)>,
) {
    if status.is_over() {
        return;
    }

    for (player, mut pos, mut vel) in query.iter_mut() {
        if pos.x < player.radius {
            pos.x = player.radius;
            vel.vx *= -RESTITUTION;
        }
        if pos.x > viewport.width - player.radius {
            pos.x = viewport.width - player.radius;
            vel.vx *= -RESTITUTION;
        }
        if pos.y < player.radius {
            pos.y = player.radius;
            vel.vy *= -RESTITUTION;
        }
        if pos.y > viewport.height - player.radius {
            pos.y = viewport.height - player.radius;
            vel.vy *= -RESTITUTION;
        }
    }
}
