//! Ambient drift - decorative motion for stars, debris, comets, and
//! satellites. These systems keep running after the terminal latch so
//! the end-of-session overlay still sits on a living backdrop.

use bevy_ecs::prelude::*;
use rand::Rng;

use crate::components::*;
use crate::worldgen::Viewport;

/// System that scrolls stars downward and wraps them to the top.
///
/// Nearer layers scroll faster (parallax); a wrapped star re-enters at a
/// fresh horizontal position.
pub fn star_drift_system(viewport: Res<Viewport>, mut query: Query<(&mut Position, &Star)>) {
    let mut rng = rand::thread_rng();
    for (mut pos, star) in query.iter_mut() {
        pos.y += star.fall_speed * (star.layer as f32 + 1.0) * 0.5;
        if pos.y > viewport.height {
            pos.y = 0.0;
            pos.x = rng.gen_range(0.0..viewport.width.max(1.0));
        }
    }
}

/// System that translates debris along its heading, spins it, and wraps
/// it at the edges with a size margin.
pub fn debris_drift_system(viewport: Res<Viewport>, mut query: Query<(&mut Position, &mut Debris)>) {
    for (mut pos, mut debris) in query.iter_mut() {
        pos.x += debris.heading.cos() * debris.speed;
        pos.y += debris.heading.sin() * debris.speed;
        let spin = debris.spin;
        debris.angle += spin;

        let margin = debris.size;
        if pos.x < -margin {
            pos.x = viewport.width + margin;
        }
        if pos.x > viewport.width + margin {
            pos.x = -margin;
        }
        if pos.y < -margin {
            pos.y = viewport.height + margin;
        }
        if pos.y > viewport.height + margin {
            pos.y = -margin;
        }
    }
}

/// System that translates comets along their heading, wrapping with a
/// tail-length margin so the tail finishes leaving before re-entry.
pub fn comet_drift_system(viewport: Res<Viewport>, mut query: Query<(&mut Position, &Comet)>) {
    for (mut pos, comet) in query.iter_mut() {
        pos.x += comet.heading.cos() * comet.speed;
        pos.y += comet.heading.sin() * comet.speed;

        let margin = comet.tail_length;
        if pos.x < -margin {
            pos.x = viewport.width + margin;
        }
        if pos.x > viewport.width + margin {
            pos.x = -margin;
        }
        if pos.y < -margin {
            pos.y = viewport.height + margin;
        }
        if pos.y > viewport.height + margin {
            pos.y = -margin;
        }
    }
}

/// System that advances each satellite around its fixed orbit center at
/// constant angular rate and spins the body.
pub fn satellite_orbit_system(mut query: Query<(&mut Position, &mut Satellite)>) {
    for (mut pos, mut sat) in query.iter_mut() {
        let advance = sat.orbit_speed * 0.01;
        sat.orbit_angle += advance;
        pos.x = sat.center_x + sat.orbit_angle.cos() * sat.orbit_radius;
        pos.y = sat.center_y + sat.orbit_angle.sin() * sat.orbit_radius;
        let spin = sat.spin;
        sat.angle += spin;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport_world() -> World {
        let mut world = World::new();
        world.insert_resource(Viewport::new(800.0, 600.0));
        world
    }

    fn run<M>(world: &mut World, systems: impl IntoSystemConfigs<M>) {
        let mut schedule = Schedule::default();
        schedule.add_systems(systems);
        schedule.run(world);
    }

    #[test]
    fn test_stars_scroll_and_wrap() {
        let mut world = viewport_world();
        let falling = world
            .spawn((
                Position::new(100.0, 10.0),
                Star {
                    size: 2.0,
                    fall_speed: 0.04,
                    opacity: 0.5,
                    layer: 1,
                },
            ))
            .id();
        let wrapping = world
            .spawn((
                Position::new(100.0, 600.5),
                Star {
                    size: 3.0,
                    fall_speed: 0.04,
                    opacity: 0.3,
                    layer: 2,
                },
            ))
            .id();

        run(&mut world, star_drift_system);

        let pos = world.get::<Position>(falling).unwrap();
        assert!((pos.y - (10.0 + 0.04 * 2.0 * 0.5)).abs() < 1e-6);

        let pos = world.get::<Position>(wrapping).unwrap();
        assert_eq!(pos.y, 0.0);
        assert!(pos.x >= 0.0 && pos.x <= 800.0);
    }

    #[test]
    fn test_debris_wraps_with_size_margin() {
        let mut world = viewport_world();
        let entity = world
            .spawn((
                Position::new(804.0, 300.0),
                Debris {
                    size: 3.0,
                    speed: 0.5,
                    heading: 0.0, // due right
                    spin: 0.01,
                    angle: 0.0,
                },
            ))
            .id();

        run(&mut world, debris_drift_system);

        let pos = world.get::<Position>(entity).unwrap();
        assert_eq!(pos.x, -3.0); // wrapped past width + size
        let debris = world.get::<Debris>(entity).unwrap();
        assert!((debris.angle - 0.01).abs() < 1e-6);
    }

    #[test]
    fn test_comet_travels_along_heading() {
        let mut world = viewport_world();
        let entity = world
            .spawn((
                Position::new(400.0, 300.0),
                Comet {
                    size: 8.0,
                    speed: 2.0,
                    heading: std::f32::consts::FRAC_PI_2, // straight down
                    tail_length: 30.0,
                    hue: 40.0,
                },
            ))
            .id();

        run(&mut world, comet_drift_system);

        let pos = world.get::<Position>(entity).unwrap();
        assert!((pos.x - 400.0).abs() < 1e-4);
        assert!((pos.y - 302.0).abs() < 1e-4);
    }

    #[test]
    fn test_satellite_keeps_orbit_radius() {
        let mut world = viewport_world();
        let entity = world
            .spawn((
                Position::new(0.0, 0.0),
                Satellite {
                    size: 6.0,
                    orbit_speed: 0.8,
                    spin: 0.01,
                    angle: 0.0,
                    orbit_radius: 100.0,
                    orbit_angle: 0.0,
                    center_x: 400.0,
                    center_y: 300.0,
                },
            ))
            .id();

        for _ in 0..50 {
            run(&mut world, satellite_orbit_system);
        }

        let pos = world.get::<Position>(entity).unwrap();
        let dx = pos.x - 400.0;
        let dy = pos.y - 300.0;
        let radius = (dx * dx + dy * dy).sqrt();
        assert!((radius - 100.0).abs() < 1e-3);

        let sat = world.get::<Satellite>(entity).unwrap();
        assert!((sat.orbit_angle - 0.8 * 0.01 * 50.0).abs() < 1e-4);
    }
}
