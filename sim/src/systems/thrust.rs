//! Thrust system - converts held keys into velocity changes.

use bevy_ecs::prelude::*;

use crate::components::*;
use crate::input::InputState;
use crate::systems::status::GameStatus;

/// System that applies thrust for every held axis.
///
/// Opposite axes cancel; diagonals compose additively (no normalization,
/// so diagonal thrust is stronger by sqrt(2), matching the feel of the
/// arcade handling).
pub fn thrust_system(
    status: Res<GameStatus>,
    input: Res<InputState>,
    mut query: Query<(&Player, &mut Velocity)>,
) {
    if status.is_over() {
        return;
    }

    for (player, mut vel) in query.iter_mut() {
        if input.up {
            vel.vy -= player.thrust;
        }
        if input.down {
            vel.vy += player.thrust;
        }
        if input.left {
            vel.vx -= player.thrust;
        }
        if input.right {
            vel.vx += player.thrust;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world_with_player() -> (World, Entity) {
        let mut world = World::new();
        world.insert_resource(GameStatus::default());
        world.insert_resource(InputState::default());
        let entity = world
            .spawn((Player::default(), Velocity::default()))
            .id();
        (world, entity)
    }

    fn run(world: &mut World) {
        let mut schedule = Schedule::default();
        schedule.add_systems(thrust_system);
        schedule.run(world);
    }

    #[test]
    fn test_single_axis_thrust() {
        let (mut world, entity) = world_with_player();
        world.resource_mut::<InputState>().key_down("ArrowUp");

        run(&mut world);

        let vel = world.get::<Velocity>(entity).unwrap();
        assert!((vel.vy - (-0.1)).abs() < 1e-6);
        assert_eq!(vel.vx, 0.0);
    }

    #[test]
    fn test_simultaneous_keys_compose() {
        let (mut world, entity) = world_with_player();
        {
            let mut input = world.resource_mut::<InputState>();
            input.key_down("w");
            input.key_down("d");
        }

        run(&mut world);

        let vel = world.get::<Velocity>(entity).unwrap();
        assert!((vel.vy - (-0.1)).abs() < 1e-6);
        assert!((vel.vx - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_opposite_keys_cancel() {
        let (mut world, entity) = world_with_player();
        {
            let mut input = world.resource_mut::<InputState>();
            input.key_down("ArrowLeft");
            input.key_down("ArrowRight");
        }

        run(&mut world);

        let vel = world.get::<Velocity>(entity).unwrap();
        assert_eq!(vel.vx, 0.0);
    }

    #[test]
    fn test_no_thrust_after_terminal() {
        let (mut world, entity) = world_with_player();
        world.resource_mut::<InputState>().key_down("ArrowUp");
        world.resource_mut::<GameStatus>().latch(
            crate::systems::status::EndCause::ResourcesDepleted,
        );

        run(&mut world);

        let vel = world.get::<Velocity>(entity).unwrap();
        assert_eq!(vel.vy, 0.0);
    }
}
