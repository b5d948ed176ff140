//! Snapshot types - the immutable per-frame view of the simulation.
//!
//! The simulation core never touches the screen; each frame it publishes
//! a `Snapshot` that the presentation layer (canvas renderer, HUD
//! overlays, mini-map) consumes. Everything here is serializable so the
//! same view can cross a JSON boundary.

use bevy_ecs::prelude::*;
use serde::{Deserialize, Serialize};

use crate::components::*;
use crate::input::InputState;
use crate::systems::encounter::{ExplorationProgress, Inventory, Mission, MissionLog};
use crate::systems::life_support::LifeSupport;
use crate::systems::status::{EndCause, GameStatus};

/// Player state for rendering.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub radius: f32,
}

/// Planet state for rendering and the mini-map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanetSnapshot {
    pub name: String,
    pub fact: String,
    pub color: String,
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub rings: bool,
    pub visited: bool,
}

/// Background star.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StarSnapshot {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub opacity: f32,
    pub layer: u8,
}

/// Drifting debris fragment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DebrisSnapshot {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub angle: f32,
}

/// Comet head plus the parameters needed to draw its tail.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CometSnapshot {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub heading: f32,
    pub tail_length: f32,
    pub hue: f32,
}

/// Orbiting satellite.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SatelliteSnapshot {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub angle: f32,
}

/// One-shot encounter notification for the planet popup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncounterSnapshot {
    pub planet: String,
    pub fact: String,
}

/// Complete per-frame simulation state for the presentation layer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    /// Frame counter at capture time.
    pub frame: u64,
    /// Fuel percentage, 0-100.
    pub fuel: f32,
    /// Oxygen percentage, 0-100.
    pub oxygen: f32,
    /// Planets visited so far.
    pub visited_planets: u32,
    /// Session target (number of planets placed).
    pub total_planets: u32,
    /// True while a thrust key is held and fuel remains; drives the
    /// flame overlay.
    pub thrusting: bool,
    /// Latched end-of-session flag.
    pub game_over: bool,
    /// Why the session ended, when it has.
    pub end_cause: Option<EndCause>,
    /// Absent only before the surface is first laid out.
    pub player: Option<PlayerSnapshot>,
    pub planets: Vec<PlanetSnapshot>,
    pub stars: Vec<StarSnapshot>,
    pub debris: Vec<DebrisSnapshot>,
    pub comets: Vec<CometSnapshot>,
    pub satellites: Vec<SatelliteSnapshot>,
    pub missions: Vec<Mission>,
    pub inventory: Vec<String>,
    /// Encounters fired by the most recent frame (cleared by the next).
    pub encounters: Vec<EncounterSnapshot>,
}

impl Snapshot {
    /// Capture a snapshot from the ECS world.
    pub fn from_world(world: &mut World, frame: u64) -> Self {
        let mut snapshot = Snapshot {
            frame,
            ..Default::default()
        };

        if let Some(life) = world.get_resource::<LifeSupport>() {
            snapshot.fuel = life.fuel;
            snapshot.oxygen = life.oxygen;
        }
        if let Some(progress) = world.get_resource::<ExplorationProgress>() {
            snapshot.visited_planets = progress.visited;
            snapshot.total_planets = progress.total;
        }
        if let Some(status) = world.get_resource::<GameStatus>() {
            snapshot.game_over = status.over;
            snapshot.end_cause = status.cause;
        }
        let thrust_held = world
            .get_resource::<InputState>()
            .map(|input| input.any_thrust())
            .unwrap_or(false);
        snapshot.thrusting = thrust_held && snapshot.fuel > 0.0;

        if let Some(missions) = world.get_resource::<MissionLog>() {
            snapshot.missions = missions.missions.clone();
        }
        if let Some(inventory) = world.get_resource::<Inventory>() {
            snapshot.inventory = inventory.items.clone();
        }

        let mut player_query = world.query::<(&Player, &Position, &Velocity)>();
        if let Ok((player, pos, vel)) = player_query.get_single(world) {
            snapshot.player = Some(PlayerSnapshot {
                x: pos.x,
                y: pos.y,
                vx: vel.vx,
                vy: vel.vy,
                radius: player.radius,
            });
        }

        let mut planet_query = world.query::<(&Position, &Planet)>();
        for (pos, planet) in planet_query.iter(world) {
            snapshot.planets.push(PlanetSnapshot {
                name: planet.name.clone(),
                fact: planet.fact.clone(),
                color: planet.color.clone(),
                x: pos.x,
                y: pos.y,
                radius: planet.radius,
                rings: planet.rings,
                visited: planet.visited,
            });
        }

        let mut star_query = world.query::<(&Position, &Star)>();
        for (pos, star) in star_query.iter(world) {
            snapshot.stars.push(StarSnapshot {
                x: pos.x,
                y: pos.y,
                size: star.size,
                opacity: star.opacity,
                layer: star.layer,
            });
        }

        let mut debris_query = world.query::<(&Position, &Debris)>();
        for (pos, debris) in debris_query.iter(world) {
            snapshot.debris.push(DebrisSnapshot {
                x: pos.x,
                y: pos.y,
                size: debris.size,
                angle: debris.angle,
            });
        }

        let mut comet_query = world.query::<(&Position, &Comet)>();
        for (pos, comet) in comet_query.iter(world) {
            snapshot.comets.push(CometSnapshot {
                x: pos.x,
                y: pos.y,
                size: comet.size,
                heading: comet.heading,
                tail_length: comet.tail_length,
                hue: comet.hue,
            });
        }

        let mut satellite_query = world.query::<(&Position, &Satellite)>();
        for (pos, sat) in satellite_query.iter(world) {
            snapshot.satellites.push(SatelliteSnapshot {
                x: pos.x,
                y: pos.y,
                size: sat.size,
                angle: sat.angle,
            });
        }

        let mut event_query = world.query::<&EncounterEvent>();
        for event in event_query.iter(world) {
            snapshot.encounters.push(EncounterSnapshot {
                planet: event.planet.clone(),
                fact: event.fact.clone(),
            });
        }

        snapshot
    }

    /// Serialize snapshot to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serialize snapshot to a pretty JSON string.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
