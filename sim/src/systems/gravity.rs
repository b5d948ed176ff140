//! Gravity system - planetary attraction inside influence zones.

use bevy_ecs::prelude::*;

use crate::components::*;
use crate::systems::status::GameStatus;

/// System that pulls the player toward every zone containing it.
///
/// The force decays linearly from full strength at the center to zero at
/// the zone edge: `strength * (1 - distance / radius)`. Overlapping zones
/// compose additively; there is no nearest-zone winner.
pub fn gravity_system(
    status: Res<GameStatus>,
    zones: Query<(&Position, &GravityZone)>,
    mut player: Query<(&Position, &mut Velocity), With<Player>>,
) {
    if status.is_over() {
        return;
    }

    for (pos, mut vel) in player.iter_mut() {
        for (zone_pos, zone) in zones.iter() {
            let dx = pos.x - zone_pos.x;
            let dy = pos.y - zone_pos.y;
            let distance = (dx * dx + dy * dy).sqrt();

            if distance < zone.radius {
                let force = zone.strength * (1.0 - distance / zone.radius);
                // atan2 keeps the dead-center case finite (pulls along +x).
                let angle = dy.atan2(dx);
                vel.vx -= angle.cos() * force;
                vel.vy -= angle.sin() * force;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(world: &mut World) {
        let mut schedule = Schedule::default();
        schedule.add_systems(gravity_system);
        schedule.run(world);
    }

    fn spawn_zone(world: &mut World, x: f32, y: f32, radius: f32, strength: f32) {
        world.spawn((Position::new(x, y), GravityZone { radius, strength }));
    }

    fn spawn_player_at(world: &mut World, x: f32, y: f32) -> Entity {
        world
            .spawn((Player::default(), Position::new(x, y), Velocity::default()))
            .id()
    }

    #[test]
    fn test_linear_falloff_magnitude() {
        let mut world = World::new();
        world.insert_resource(GameStatus::default());
        spawn_zone(&mut world, 0.0, 0.0, 150.0, 0.1);
        // 75 units out along +x: exactly half the radius.
        let entity = spawn_player_at(&mut world, 75.0, 0.0);

        run(&mut world);

        let vel = world.get::<Velocity>(entity).unwrap();
        let expected = 0.1 * (1.0 - 75.0 / 150.0);
        assert!((vel.vx - (-expected)).abs() < 1e-6, "vx = {}", vel.vx);
        assert!(vel.vy.abs() < 1e-6);
    }

    #[test]
    fn test_pull_is_toward_center() {
        let mut world = World::new();
        world.insert_resource(GameStatus::default());
        spawn_zone(&mut world, 100.0, 100.0, 200.0, 0.08);
        let entity = spawn_player_at(&mut world, 40.0, 180.0);

        run(&mut world);

        let vel = world.get::<Velocity>(entity).unwrap();
        // Zone center is up-right of the player.
        assert!(vel.vx > 0.0);
        assert!(vel.vy < 0.0);
    }

    #[test]
    fn test_outside_zone_no_effect() {
        let mut world = World::new();
        world.insert_resource(GameStatus::default());
        spawn_zone(&mut world, 0.0, 0.0, 150.0, 0.1);
        let entity = spawn_player_at(&mut world, 150.0, 0.0); // exactly on edge

        run(&mut world);

        let vel = world.get::<Velocity>(entity).unwrap();
        assert_eq!(vel.vx, 0.0);
        assert_eq!(vel.vy, 0.0);
    }

    #[test]
    fn test_overlapping_zones_compose() {
        let mut world = World::new();
        world.insert_resource(GameStatus::default());
        // Two identical zones flanking the player: pulls cancel.
        spawn_zone(&mut world, -50.0, 0.0, 150.0, 0.1);
        spawn_zone(&mut world, 50.0, 0.0, 150.0, 0.1);
        let entity = spawn_player_at(&mut world, 0.0, 0.0);

        run(&mut world);

        let vel = world.get::<Velocity>(entity).unwrap();
        assert!(vel.vx.abs() < 1e-6);
        assert!(vel.vy.abs() < 1e-6);
    }
}
