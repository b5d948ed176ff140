//! Public API for the simulation.
//!
//! This module provides the main interface for the browser page (or any
//! other host) to interact with the simulation.
//!
//! ## Frame Model
//!
//! The host calls `step()` once per animation frame (nominally 60 Hz).
//! There is no wall-clock timestep: every rate in the simulation is a
//! fixed per-frame increment, so the session advances identically on any
//! display. Input arrives asynchronously through `key_down`/`key_up` and
//! is polled at the start of the next frame.
//!
//! ## Surface Lifecycle
//!
//! The rendering surface may not be laid out when the session is
//! constructed (zero width/height). Generation is deferred until the
//! host reports a real size through `resize()`; stepping an ungenerated
//! session is harmless.

use bevy_ecs::prelude::*;
use rand::Rng;

use crate::components::*;
use crate::input::InputState;
use crate::systems::*;
use crate::world::Snapshot;
use crate::worldgen::{generate_world, SimConfig, Viewport};

/// The main simulation container.
///
/// Owns the ECS world and schedule, providing a clean API for:
/// - Initializing a session from the surface size
/// - Stepping the simulation one frame at a time
/// - Forwarding keyboard input
/// - Extracting per-frame snapshots
/// - Resetting the session in place
pub struct SpaceSim {
    world: World,
    schedule: Schedule,
    frame: u64,
    generated: bool,
}

impl SpaceSim {
    /// Create a session sized to the rendering surface.
    pub fn new(width: f32, height: f32) -> Self {
        Self::with_config(SimConfig::default(), width, height)
    }

    /// Create a session with custom generation tunables.
    pub fn with_config(config: SimConfig, width: f32, height: f32) -> Self {
        let mut world = World::new();

        world.insert_resource(InputState::default());
        world.insert_resource(LifeSupport::default());
        world.insert_resource(MissionLog::default());
        world.insert_resource(Inventory::default());
        world.insert_resource(ExplorationProgress::new(config.planet_count as u32));
        world.insert_resource(GameStatus::default());
        world.insert_resource(FrameCount::default());
        world.insert_resource(Viewport::new(width, height));
        world.insert_resource(config);

        let mut schedule = Schedule::default();
        schedule.add_systems(
            (
                clear_encounter_events_system,
                thrust_system,
                gravity_system,
                speed_limit_system,
                friction_system,
                drain_system,
                integrate_system,
                boundary_system,
                encounter_system,
                terminal_system,
                star_drift_system,
                debris_drift_system,
                comet_drift_system,
                satellite_orbit_system,
            )
                .chain(),
        );

        let mut sim = Self {
            world,
            schedule,
            frame: 0,
            generated: false,
        };
        sim.generate_if_ready(&mut rand::thread_rng());
        sim
    }

    fn generate_if_ready(&mut self, rng: &mut impl Rng) {
        if self.generated {
            return;
        }
        let viewport = *self.world.resource::<Viewport>();
        if !viewport.is_laid_out() {
            return;
        }
        let config = self.world.resource::<SimConfig>().clone();
        generate_world(&mut self.world, &config, viewport, rng);
        self.generated = true;
    }

    /// Advance the simulation by one frame.
    pub fn step(&mut self) {
        self.frame += 1;
        if let Some(mut frame_res) = self.world.get_resource_mut::<FrameCount>() {
            frame_res.increment();
        }
        self.schedule.run(&mut self.world);
    }

    /// Re-measure contract: the host calls this whenever the surface is
    /// resized or first laid out. Non-positive dimensions are ignored.
    /// The first real size triggers the deferred session generation.
    pub fn resize(&mut self, width: f32, height: f32) {
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        self.world.insert_resource(Viewport::new(width, height));
        self.generate_if_ready(&mut rand::thread_rng());
    }

    /// Host key-press entry point (DOM key names, e.g. `"ArrowUp"`, `"w"`).
    pub fn key_down(&mut self, name: &str) {
        if let Some(mut input) = self.world.get_resource_mut::<InputState>() {
            input.key_down(name);
        }
    }

    /// Host key-release entry point.
    pub fn key_up(&mut self, name: &str) {
        if let Some(mut input) = self.world.get_resource_mut::<InputState>() {
            input.key_up(name);
        }
    }

    /// Get a snapshot of the current simulation state.
    pub fn snapshot(&mut self) -> Snapshot {
        Snapshot::from_world(&mut self.world, self.frame)
    }

    /// Get the snapshot as a JSON string.
    pub fn snapshot_json(&mut self) -> String {
        self.snapshot().to_json().unwrap_or_else(|_| "{}".to_string())
    }

    /// Restart the session in place: the player returns to the surface
    /// center at rest, gauges refill, visited flags and counters clear,
    /// the mission catalog is re-cloned, and the inventory empties. The
    /// planet layout, gravity zones, and decoratives keep their
    /// positions from the existing session.
    pub fn reset(&mut self) {
        let center = self.world.resource::<Viewport>().center();

        let mut player_query = self
            .world
            .query_filtered::<(&mut Position, &mut Velocity), With<Player>>();
        for (mut pos, mut vel) in player_query.iter_mut(&mut self.world) {
            *pos = center;
            *vel = Velocity::default();
        }

        let mut planet_query = self.world.query::<&mut Planet>();
        for mut planet in planet_query.iter_mut(&mut self.world) {
            planet.visited = false;
        }

        let mut event_query = self
            .world
            .query_filtered::<Entity, With<EncounterEvent>>();
        let events: Vec<Entity> = event_query.iter(&self.world).collect();
        for entity in events {
            self.world.despawn(entity);
        }

        self.world.resource_mut::<LifeSupport>().reset();
        self.world.resource_mut::<MissionLog>().reset();
        self.world.resource_mut::<Inventory>().clear();
        self.world.resource_mut::<ExplorationProgress>().visited = 0;
        self.world.resource_mut::<GameStatus>().reset();
    }

    /// Get the current frame number.
    pub fn current_frame(&self) -> u64 {
        self.frame
    }

    /// True once a terminal state has latched.
    pub fn is_over(&self) -> bool {
        self.world
            .get_resource::<GameStatus>()
            .map(|s| s.is_over())
            .unwrap_or(false)
    }

    /// Current fuel percentage.
    pub fn fuel(&self) -> f32 {
        self.world
            .get_resource::<LifeSupport>()
            .map(|l| l.fuel)
            .unwrap_or(0.0)
    }

    /// Current oxygen percentage.
    pub fn oxygen(&self) -> f32 {
        self.world
            .get_resource::<LifeSupport>()
            .map(|l| l.oxygen)
            .unwrap_or(0.0)
    }

    /// Planets visited this session.
    pub fn visited_planets(&self) -> u32 {
        self.world
            .get_resource::<ExplorationProgress>()
            .map(|p| p.visited)
            .unwrap_or(0)
    }

    /// Get direct access to the ECS world (for advanced usage).
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get mutable access to the ECS world (for advanced usage).
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }
}

impl Default for SpaceSim {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn teleport_player(sim: &mut SpaceSim, x: f32, y: f32) {
        let mut query = sim
            .world_mut()
            .query_filtered::<&mut Position, With<Player>>();
        for mut pos in query.iter_mut(sim.world_mut()) {
            pos.x = x;
            pos.y = y;
        }
    }

    fn first_planet(sim: &mut SpaceSim) -> (f32, f32, f32) {
        let mut query = sim.world_mut().query::<(&Position, &Planet)>();
        let (pos, planet) = query.iter(sim.world()).next().expect("planets generated");
        (pos.x, pos.y, planet.radius)
    }

    #[test]
    fn test_new_session() {
        let mut sim = SpaceSim::new(1280.0, 720.0);
        assert_eq!(sim.current_frame(), 0);
        assert_eq!(sim.fuel(), 100.0);
        assert_eq!(sim.oxygen(), 100.0);
        assert!(!sim.is_over());

        let snapshot = sim.snapshot();
        assert_eq!(snapshot.planets.len(), 5);
        assert_eq!(snapshot.stars.len(), 220);
        assert_eq!(snapshot.debris.len(), 30);
        assert_eq!(snapshot.comets.len(), 5);
        assert_eq!(snapshot.satellites.len(), 8);
        assert_eq!(snapshot.missions.len(), 5);
        let player = snapshot.player.expect("player generated");
        assert_eq!(player.x, 640.0);
        assert_eq!(player.y, 360.0);
    }

    #[test]
    fn test_zero_surface_defers_generation() {
        let mut sim = SpaceSim::new(0.0, 0.0);
        assert!(sim.snapshot().player.is_none());

        // Stepping before layout is harmless.
        sim.step();
        assert_eq!(sim.current_frame(), 1);

        sim.resize(800.0, 600.0);
        let snapshot = sim.snapshot();
        assert_eq!(snapshot.planets.len(), 5);
        let player = snapshot.player.expect("generated on first real size");
        assert_eq!(player.x, 400.0);
        assert_eq!(player.y, 300.0);
    }

    #[test]
    fn test_step_advances_frame_and_drains_oxygen() {
        let mut sim = SpaceSim::new(800.0, 600.0);
        sim.step();
        sim.step();
        assert_eq!(sim.current_frame(), 2);
        assert!((sim.oxygen() - 99.9).abs() < 1e-3);
        assert_eq!(sim.fuel(), 100.0); // no thrust held
    }

    #[test]
    fn test_resources_stay_bounded_for_whole_session() {
        let mut sim = SpaceSim::new(800.0, 600.0);
        sim.key_down("ArrowRight");
        for _ in 0..2500 {
            sim.step();
            assert!(sim.fuel() >= 0.0 && sim.fuel() <= 100.0);
            assert!(sim.oxygen() >= 0.0 && sim.oxygen() <= 100.0);
        }
        // 0.2 fuel per thrusting frame empties the tank inside 2500 frames.
        assert!(sim.is_over());
    }

    #[test]
    fn test_terminal_latch_freezes_player() {
        let mut sim = SpaceSim::new(800.0, 600.0);
        sim.key_down("d");
        // 500 thrusting frames drive fuel from 100 to 0 (oxygen is at 75).
        for _ in 0..501 {
            sim.step();
        }
        assert!(sim.is_over());
        assert_eq!(sim.fuel(), 0.0);
        assert!(sim.oxygen() > 0.0);

        let before = sim.snapshot().player.unwrap();
        for _ in 0..10 {
            sim.step();
        }
        let after = sim.snapshot().player.unwrap();
        assert_eq!(before.x, after.x);
        assert_eq!(before.y, after.y);
    }

    #[test]
    fn test_encounter_via_proximity() {
        let mut sim = SpaceSim::new(1280.0, 720.0);
        let (px, py, radius) = first_planet(&mut sim);
        // Park over the planet, well inside its trigger ring and outside
        // every other planet's (separation keeps the rings disjoint).
        teleport_player(&mut sim, px + radius * 0.5, py);

        sim.step();

        let snapshot = sim.snapshot();
        assert_eq!(snapshot.visited_planets, 1);
        assert_eq!(snapshot.encounters.len(), 1);
        assert_eq!(snapshot.inventory.len(), 1);
        assert!(snapshot.missions.iter().any(|m| m.completed));

        // The event is one-shot: gone after the next frame.
        sim.step();
        let snapshot = sim.snapshot();
        assert!(snapshot.encounters.is_empty());
        assert_eq!(snapshot.visited_planets, 1);
    }

    #[test]
    fn test_completion_after_delay() {
        let mut sim = SpaceSim::new(1280.0, 720.0);
        let planets: Vec<(f32, f32)> = {
            let mut query = sim.world_mut().query::<(&Position, &Planet)>();
            query
                .iter(sim.world())
                .map(|(pos, _)| (pos.x, pos.y))
                .collect()
        };
        for (x, y) in planets {
            teleport_player(&mut sim, x, y);
            sim.step();
        }
        assert_eq!(sim.visited_planets(), 5);
        assert!(!sim.is_over(), "completion is delayed, not immediate");

        for _ in 0..60 {
            sim.step();
        }
        assert!(sim.is_over());
        assert_eq!(
            sim.snapshot().end_cause,
            Some(crate::systems::status::EndCause::AllPlanetsVisited)
        );
    }

    #[test]
    fn test_reset_restores_session_keeps_layout() {
        let mut sim = SpaceSim::new(1280.0, 720.0);
        let layout_before: Vec<(f32, f32)> = sim
            .snapshot()
            .planets
            .iter()
            .map(|p| (p.x, p.y))
            .collect();

        // Burn resources and visit a planet.
        sim.key_down("w");
        for _ in 0..50 {
            sim.step();
        }
        let (px, py, _) = first_planet(&mut sim);
        teleport_player(&mut sim, px, py);
        sim.step();
        assert_eq!(sim.visited_planets(), 1);
        assert!(sim.fuel() < 100.0);

        sim.reset();

        let snapshot = sim.snapshot();
        assert_eq!(snapshot.fuel, 100.0);
        assert_eq!(snapshot.oxygen, 100.0);
        assert_eq!(snapshot.visited_planets, 0);
        assert!(snapshot.inventory.is_empty());
        assert!(snapshot.missions.iter().all(|m| !m.completed));
        assert!(!snapshot.game_over);
        assert!(snapshot.encounters.is_empty());
        assert!(snapshot.planets.iter().all(|p| !p.visited));

        let layout_after: Vec<(f32, f32)> =
            snapshot.planets.iter().map(|p| (p.x, p.y)).collect();
        assert_eq!(layout_before, layout_after);

        let player = snapshot.player.unwrap();
        assert_eq!(player.x, 640.0);
        assert_eq!(player.y, 360.0);
        assert_eq!(player.vx, 0.0);
    }

    #[test]
    fn test_reset_clears_terminal_latch() {
        let mut sim = SpaceSim::new(800.0, 600.0);
        sim.key_down("a");
        for _ in 0..501 {
            sim.step();
        }
        assert!(sim.is_over());

        sim.reset();
        assert!(!sim.is_over());
        assert_eq!(sim.fuel(), 100.0);

        // The session runs again after reset.
        sim.step();
        assert!(sim.fuel() < 100.0); // key still held, thrust resumes
    }

    #[test]
    fn test_snapshot_json_shape() {
        let mut sim = SpaceSim::new(800.0, 600.0);
        let json = sim.snapshot_json();
        assert!(json.contains("planets"));
        assert!(json.contains("Mercury"));
        assert!(json.contains("Saturn"));
        assert!(json.contains("missions"));
        assert!(json.contains("Collect Samples"));
    }
}
