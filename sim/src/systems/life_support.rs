//! Life support - fuel and oxygen drain.

use bevy_ecs::prelude::*;

use crate::input::InputState;
use crate::systems::status::GameStatus;

/// Fuel burned per frame while any thrust key is held.
const FUEL_BURN_PER_FRAME: f32 = 0.2;

/// Oxygen consumed per frame, unconditionally.
const OXYGEN_DRAIN_PER_FRAME: f32 = 0.05;

/// Scalar resource gauges, both percentages in [0, 100].
///
/// Monotonically non-increasing during a session; only `reset` refills
/// them. Drains floor at zero, never negative.
#[derive(Resource, Debug, Clone, Copy)]
pub struct LifeSupport {
    pub fuel: f32,
    pub oxygen: f32,
}

impl Default for LifeSupport {
    fn default() -> Self {
        Self {
            fuel: 100.0,
            oxygen: 100.0,
        }
    }
}

impl LifeSupport {
    pub fn burn_fuel(&mut self, amount: f32) {
        self.fuel = (self.fuel - amount).max(0.0);
    }

    pub fn drain_oxygen(&mut self, amount: f32) {
        self.oxygen = (self.oxygen - amount).max(0.0);
    }

    /// Either gauge at the floor ends the session.
    pub fn is_depleted(&self) -> bool {
        self.fuel <= 0.0 || self.oxygen <= 0.0
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// System that applies the per-frame drain: fuel only while thrusting,
/// oxygen always.
pub fn drain_system(
    status: Res<GameStatus>,
    input: Res<InputState>,
    mut life: ResMut<LifeSupport>,
) {
    if status.is_over() {
        return;
    }

    if input.any_thrust() {
        life.burn_fuel(FUEL_BURN_PER_FRAME);
    }
    life.drain_oxygen(OXYGEN_DRAIN_PER_FRAME);
}
