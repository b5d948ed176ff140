//! Session status - terminal-state latching and frame bookkeeping.

use bevy_ecs::prelude::*;
use serde::{Deserialize, Serialize};

use crate::systems::life_support::LifeSupport;

/// Global frame counter. Increments once per `step()`.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct FrameCount(pub u64);

impl FrameCount {
    pub fn increment(&mut self) {
        self.0 = self.0.wrapping_add(1);
    }
}

/// Why the session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndCause {
    /// Fuel or oxygen reached zero.
    ResourcesDepleted,
    /// Every planet was visited.
    AllPlanetsVisited,
}

/// Latched end-of-session state.
///
/// Once `over` is set, the physics/encounter systems skip their work
/// until an explicit reset; the ambient drift keeps animating.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct GameStatus {
    pub over: bool,
    pub cause: Option<EndCause>,
    /// Frame at which the scheduled completion terminal state fires,
    /// set by the encounter system on the final planet visit.
    pub complete_at: Option<u64>,
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        self.over
    }

    pub fn latch(&mut self, cause: EndCause) {
        self.over = true;
        self.cause = Some(cause);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// System that latches the terminal state.
///
/// Resource depletion wins over a pending completion deadline when both
/// hold on the same frame.
pub fn terminal_system(
    life: Res<LifeSupport>,
    frame: Res<FrameCount>,
    mut status: ResMut<GameStatus>,
) {
    if status.is_over() {
        return;
    }

    if life.is_depleted() {
        status.latch(EndCause::ResourcesDepleted);
        return;
    }

    if let Some(at) = status.complete_at {
        if frame.0 >= at {
            status.latch(EndCause::AllPlanetsVisited);
        }
    }
}
