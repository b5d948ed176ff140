//! Session world generation.
//!
//! Populates an empty ECS world from the measured surface size: the player
//! at the surface center, the five-planet layout placed by rejection
//! sampling, one gravity zone per planet, and the decorative star field,
//! debris, comets, and satellites. Runs once per session; `reset` reuses
//! the generated layout instead of calling back in here.

use bevy_ecs::prelude::*;
use rand::Rng;

use crate::components::*;

/// Fixed planet catalog. Index 4 (Saturn) is the ringed planet.
const PLANET_NAMES: [&str; 5] = ["Mercury", "Venus", "Mars", "Jupiter", "Saturn"];

const PLANET_COLORS: [&str; 5] = ["#A9A9A9", "#E6BC6F", "#CD5C5C", "#D8CA9D", "#E3B96A"];

const PLANET_FACTS: [&str; 5] = [
    "Mercury is the smallest and innermost planet in the Solar System.",
    "Venus is the hottest planet with surface temperatures reaching 471\u{b0}C.",
    "Mars is often called the \"Red Planet\" due to its reddish appearance.",
    "Jupiter is the largest planet with a mass two and a half times that of all other planets combined.",
    "Saturn is known for its prominent ring system made of ice particles and rocky debris.",
];

/// Star counts per parallax layer (far to near).
const STAR_LAYER_COUNTS: [usize; 3] = [100, 70, 50];

/// Maximum star opacity per layer; the minimum is 0.1 for every layer.
const STAR_LAYER_MAX_OPACITY: [f32; 3] = [0.9, 0.6, 0.4];

/// Generation tunables for a session.
#[derive(Resource, Debug, Clone)]
pub struct SimConfig {
    /// Number of planets to place (and the exploration target).
    pub planet_count: usize,
    /// Drifting debris fragments.
    pub debris_count: usize,
    /// Comets.
    pub comet_count: usize,
    /// Orbiting satellites.
    pub satellite_count: usize,
    /// Rejection-sampling budget per planet. On exhaustion the last
    /// candidate is accepted even if it overlaps a neighbor.
    pub placement_attempts: u32,
    /// Minimum center separation as a multiple of the summed radii.
    pub min_separation_factor: f32,
    /// Frames between the final planet visit and the completion terminal
    /// state (60 frames = 1 s at the nominal 60 Hz).
    pub complete_delay_frames: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            planet_count: 5,
            debris_count: 30,
            comet_count: 5,
            satellite_count: 8,
            placement_attempts: 100,
            min_separation_factor: 1.5,
            complete_delay_frames: 60,
        }
    }
}

/// Measured size of the rendering surface.
///
/// Zero dimensions mean the surface has not been laid out yet; generation
/// is deferred until the host reports a real size via `resize`.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn is_laid_out(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    pub fn center(&self) -> Position {
        Position::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Populate `world` with a full session layout.
///
/// The caller is responsible for having inserted the `Viewport` resource
/// with a laid-out size; `rng` is threaded through so tests can seed it.
pub fn generate_world(world: &mut World, config: &SimConfig, viewport: Viewport, rng: &mut impl Rng) {
    spawn_player(world, viewport);
    spawn_stars(world, viewport, rng);
    spawn_planets(world, config, viewport, rng);
    spawn_debris(world, config, viewport, rng);
    spawn_comets(world, config, viewport, rng);
    spawn_satellites(world, config, viewport, rng);
}

fn spawn_player(world: &mut World, viewport: Viewport) {
    world.spawn((Player::default(), viewport.center(), Velocity::default()));
}

fn spawn_stars(world: &mut World, viewport: Viewport, rng: &mut impl Rng) {
    for (layer, &count) in STAR_LAYER_COUNTS.iter().enumerate() {
        let max_opacity = STAR_LAYER_MAX_OPACITY[layer];
        for _ in 0..count {
            world.spawn((
                Position::new(
                    rng.gen_range(0.0..viewport.width),
                    rng.gen_range(0.0..viewport.height),
                ),
                Star {
                    size: (layer + 1) as f32,
                    fall_speed: rng.gen_range(0.0..0.05),
                    opacity: rng.gen_range(0.1..max_opacity),
                    layer: layer as u8,
                },
            ));
        }
    }
}

/// Candidate center is acceptable when every existing planet is at least
/// `factor * (r1 + r2)` away.
fn placement_is_valid(
    x: f32,
    y: f32,
    radius: f32,
    placed: &[(Position, f32)],
    factor: f32,
) -> bool {
    placed.iter().all(|(pos, other_radius)| {
        let dx = x - pos.x;
        let dy = y - pos.y;
        let distance = (dx * dx + dy * dy).sqrt();
        distance >= (radius + other_radius) * factor
    })
}

/// Pick a coordinate keeping the full disc inside `extent` where possible.
/// Degenerate surfaces (smaller than one planet) collapse to the midline
/// rather than failing.
fn planet_coordinate(extent: f32, radius: f32, rng: &mut impl Rng) -> f32 {
    if extent > radius * 2.0 {
        rng.gen_range(radius..extent - radius)
    } else {
        extent / 2.0
    }
}

fn spawn_planets(world: &mut World, config: &SimConfig, viewport: Viewport, rng: &mut impl Rng) {
    let mut placed: Vec<(Position, f32)> = Vec::with_capacity(config.planet_count);

    for i in 0..config.planet_count {
        let mut radius = 0.0;
        let mut x = 0.0;
        let mut y = 0.0;

        // Rejection sampling with a bounded retry budget. The last
        // candidate is kept when the budget runs out, so a crowded
        // surface degrades to visual overlap instead of an error.
        for _ in 0..config.placement_attempts.max(1) {
            radius = rng.gen_range(40.0..70.0);
            x = planet_coordinate(viewport.width, radius, rng);
            y = planet_coordinate(viewport.height, radius, rng);
            if placement_is_valid(x, y, radius, &placed, config.min_separation_factor) {
                break;
            }
        }
        placed.push((Position::new(x, y), radius));

        let catalog = i % PLANET_NAMES.len();
        let gravity = rng.gen_range(0.05..0.15);
        world.spawn(PlanetBundle {
            position: Position::new(x, y),
            planet: Planet {
                name: PLANET_NAMES[catalog].to_string(),
                fact: PLANET_FACTS[catalog].to_string(),
                color: PLANET_COLORS[catalog].to_string(),
                radius,
                rings: catalog == 4,
                gravity,
                visited: false,
            },
        });

        // Derived 1:1 influence region.
        world.spawn((
            Position::new(x, y),
            GravityZone {
                radius: radius * 3.0,
                strength: gravity,
            },
        ));
    }
}

fn spawn_debris(world: &mut World, config: &SimConfig, viewport: Viewport, rng: &mut impl Rng) {
    for _ in 0..config.debris_count {
        world.spawn((
            Position::new(
                rng.gen_range(0.0..viewport.width),
                rng.gen_range(0.0..viewport.height),
            ),
            Debris {
                size: rng.gen_range(2.0..7.0),
                speed: rng.gen_range(0.1..0.6),
                heading: rng.gen_range(0.0..std::f32::consts::TAU),
                spin: rng.gen_range(-0.05..0.05),
                angle: rng.gen_range(0.0..std::f32::consts::TAU),
            },
        ));
    }
}

fn spawn_comets(world: &mut World, config: &SimConfig, viewport: Viewport, rng: &mut impl Rng) {
    for _ in 0..config.comet_count {
        world.spawn((
            Position::new(
                rng.gen_range(0.0..viewport.width),
                rng.gen_range(0.0..viewport.height),
            ),
            Comet {
                size: rng.gen_range(5.0..15.0),
                speed: rng.gen_range(1.0..3.0),
                heading: rng.gen_range(0.0..std::f32::consts::TAU),
                tail_length: rng.gen_range(20.0..50.0),
                hue: rng.gen_range(0.0..60.0),
            },
        ));
    }
}

fn spawn_satellites(world: &mut World, config: &SimConfig, viewport: Viewport, rng: &mut impl Rng) {
    for _ in 0..config.satellite_count {
        let center_x = rng.gen_range(0.0..viewport.width);
        let center_y = rng.gen_range(0.0..viewport.height);
        let orbit_radius = rng.gen_range(50.0..150.0);
        let orbit_angle = rng.gen_range(0.0..std::f32::consts::TAU);
        world.spawn((
            Position::new(
                center_x + orbit_angle.cos() * orbit_radius,
                center_y + orbit_angle.sin() * orbit_radius,
            ),
            Satellite {
                size: rng.gen_range(4.0..12.0),
                orbit_speed: rng.gen_range(0.2..1.0),
                spin: rng.gen_range(-0.025..0.025),
                angle: rng.gen_range(0.0..std::f32::consts::TAU),
                orbit_radius,
                orbit_angle,
                center_x,
                center_y,
            },
        ));
    }
}
