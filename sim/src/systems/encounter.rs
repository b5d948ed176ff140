//! Planet encounters - proximity detection, inventory, and missions.

use bevy_ecs::prelude::*;
use serde::{Deserialize, Serialize};

use crate::components::*;
use crate::systems::status::{FrameCount, GameStatus};
use crate::worldgen::SimConfig;

/// Extra reach beyond the summed radii within which an encounter fires.
const ENCOUNTER_MARGIN: f32 = 30.0;

/// Catalog id of the one mission with a gameplay trigger.
const COLLECT_SAMPLES_ID: u32 = 1;

/// A catalog mission. `completed` flips one way, false -> true.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mission {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub completed: bool,
}

fn mission(id: u32, name: &str, description: &str) -> Mission {
    Mission {
        id,
        name: name.to_string(),
        description: description.to_string(),
        completed: false,
    }
}

/// The fixed five-entry mission template a session starts from.
///
/// Only "Collect Samples" is wired to a trigger (the first planet
/// encounter); the remaining four ship in the catalog without one.
pub fn mission_catalog() -> Vec<Mission> {
    vec![
        mission(1, "Collect Samples", "Collect samples from a planetary surface"),
        mission(2, "Repair Satellite", "Repair a damaged satellite in orbit"),
        mission(3, "Land on Mars", "Successfully land on the surface of Mars"),
        mission(
            4,
            "Navigate Asteroid Field",
            "Navigate through a dangerous asteroid field",
        ),
        mission(5, "Explore Unknown Planet", "Explore a newly discovered planet"),
    ]
}

/// Session mission state, cloned from the template.
#[derive(Resource, Debug, Clone)]
pub struct MissionLog {
    pub missions: Vec<Mission>,
    pub completed: u32,
}

impl Default for MissionLog {
    fn default() -> Self {
        Self {
            missions: mission_catalog(),
            completed: 0,
        }
    }
}

impl MissionLog {
    /// Mark a mission completed. Returns false if it was already done
    /// (or unknown), so callers can keep the completion count exact.
    pub fn complete(&mut self, id: u32) -> bool {
        match self.missions.iter_mut().find(|m| m.id == id && !m.completed) {
            Some(m) => {
                m.completed = true;
                self.completed += 1;
                true
            }
            None => false,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Sample items collected from visited planets, append-only.
#[derive(Resource, Debug, Clone, Default)]
pub struct Inventory {
    pub items: Vec<String>,
}

impl Inventory {
    pub fn add_sample(&mut self, planet: &str) {
        self.items.push(format!("{} Sample", planet));
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

/// Visited-planet tally against the session target.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct ExplorationProgress {
    pub visited: u32,
    pub total: u32,
}

impl ExplorationProgress {
    pub fn new(total: u32) -> Self {
        Self { visited: 0, total }
    }

    pub fn all_visited(&self) -> bool {
        self.total > 0 && self.visited >= self.total
    }
}

/// System that fires first-visit encounters.
///
/// For every unvisited planet within `radius + player radius + margin`
/// of the player: latch `visited`, bump the tally, append a sample to
/// the inventory, complete "Collect Samples" if still open, and emit a
/// one-shot `EncounterEvent`. The fifth visit schedules the completion
/// terminal state one second (in frames) out.
pub fn encounter_system(
    mut commands: Commands,
    config: Res<SimConfig>,
    frame: Res<FrameCount>,
    mut status: ResMut<GameStatus>,
    mut progress: ResMut<ExplorationProgress>,
    mut missions: ResMut<MissionLog>,
    mut inventory: ResMut<Inventory>,
    player: Query<(&Position, &Player)>,
    mut planets: Query<(&Position, &mut Planet)>,
) {
    if status.is_over() {
        return;
    }

    let Ok((player_pos, player)) = player.get_single() else {
        return;
    };

    for (planet_pos, mut planet) in planets.iter_mut() {
        if planet.visited {
            continue;
        }

        let distance = player_pos.distance_to(planet_pos);
        if distance < planet.radius + player.radius + ENCOUNTER_MARGIN {
            planet.visited = true;
            progress.visited += 1;
            inventory.add_sample(&planet.name);
            missions.complete(COLLECT_SAMPLES_ID);

            commands.spawn(EncounterEvent {
                planet: planet.name.clone(),
                fact: planet.fact.clone(),
            });

            if progress.all_visited() && status.complete_at.is_none() {
                status.complete_at = Some(frame.0 + config.complete_delay_frames);
            }
        }
    }
}

/// System that despawns the previous frame's one-shot events. Runs first
/// in the schedule so each event survives exactly one frame boundary.
pub fn clear_encounter_events_system(
    mut commands: Commands,
    events: Query<Entity, With<EncounterEvent>>,
) {
    for entity in events.iter() {
        commands.entity(entity).despawn();
    }
}
