//! ECS Components for the Space Explorer simulation.
//!
//! Components are pure data containers attached to entities.
//! All game logic lives in systems that query these components.

use bevy_ecs::prelude::*;
use serde::{Deserialize, Serialize};

// ============================================================================
// SPATIAL COMPONENTS
// ============================================================================

/// 2D position on the play surface (x = right, y = down, canvas convention).
#[derive(Component, Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Position) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// 2D velocity vector, in surface units per frame.
#[derive(Component, Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Velocity {
    pub vx: f32,
    pub vy: f32,
}

impl Velocity {
    pub fn new(vx: f32, vy: f32) -> Self {
        Self { vx, vy }
    }

    pub fn magnitude(&self) -> f32 {
        (self.vx * self.vx + self.vy * self.vy).sqrt()
    }
}

// ============================================================================
// PLAYER
// ============================================================================

/// The explorer avatar. Exactly one per session, never despawned.
///
/// Carries the fixed kinematic parameters; the mutable kinematic state
/// lives in `Position`/`Velocity`.
#[derive(Component, Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Player {
    /// Collision radius in surface units.
    pub radius: f32,
    /// Velocity added per axis per frame while a thrust key is held.
    pub thrust: f32,
    /// Per-frame velocity damping factor (< 1).
    pub friction: f32,
    /// Hard cap on speed, direction-preserving.
    pub max_speed: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            radius: 20.0,
            thrust: 0.1,
            friction: 0.95,
            max_speed: 5.0,
        }
    }
}

// ============================================================================
// PLANETS & GRAVITY
// ============================================================================

/// A visitable planet. Placed once at generation; only `visited` mutates,
/// and only false -> true.
#[derive(Component, Debug, Clone, Serialize, Deserialize)]
pub struct Planet {
    /// Display name ("Mercury", "Venus", ...).
    pub name: String,
    /// Fact text shown by the encounter popup.
    pub fact: String,
    /// CSS color used by the presentation layer.
    pub color: String,
    /// Radius in surface units.
    pub radius: f32,
    /// Whether the planet renders with a ring overlay.
    pub rings: bool,
    /// Gravity strength fed into the derived gravity zone.
    pub gravity: f32,
    /// One-way encounter latch.
    pub visited: bool,
}

/// Circular region of influence derived 1:1 from a planet
/// (radius = 3x planet radius, strength = planet gravity).
/// Read-only after creation.
#[derive(Component, Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GravityZone {
    pub radius: f32,
    pub strength: f32,
}

/// Bundle for spawning a planet together with its position.
///
/// The matching gravity zone is spawned as a separate entity so the
/// gravity system iterates zones without touching planet data.
#[derive(Bundle)]
pub struct PlanetBundle {
    pub position: Position,
    pub planet: Planet,
}

// ============================================================================
// DECORATIVE ENTITIES
// ============================================================================
//
// Purely visual: they drift, wrap, and orbit, but never interact with the
// player or resource state.

/// Background star on one of three parallax layers.
#[derive(Component, Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Star {
    /// Render size in pixels (1/2/3 by layer).
    pub size: f32,
    /// Base downward scroll speed; the drift system scales it by layer.
    pub fall_speed: f32,
    /// Render opacity, fixed per star.
    pub opacity: f32,
    /// Parallax layer index (0 = farthest).
    pub layer: u8,
}

/// Drifting rock fragment.
#[derive(Component, Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Debris {
    pub size: f32,
    /// Translation speed along `heading`, units per frame.
    pub speed: f32,
    /// Fixed travel direction in radians.
    pub heading: f32,
    /// Rotation rate per frame.
    pub spin: f32,
    /// Current rotation, advanced by the drift system.
    pub angle: f32,
}

/// Comet with a rendered tail trailing opposite its heading.
#[derive(Component, Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Comet {
    pub size: f32,
    pub speed: f32,
    pub heading: f32,
    /// Tail length in surface units; also the wrap margin.
    pub tail_length: f32,
    /// HSL hue (0-60) used by the presentation layer.
    pub hue: f32,
}

/// Satellite orbiting a fixed point at constant angular rate.
#[derive(Component, Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Satellite {
    pub size: f32,
    /// Angular rate scale; the orbit system advances by `orbit_speed * 0.01`.
    pub orbit_speed: f32,
    /// Body rotation rate per frame.
    pub spin: f32,
    /// Current body rotation.
    pub angle: f32,
    pub orbit_radius: f32,
    /// Current angle around the orbit center.
    pub orbit_angle: f32,
    pub center_x: f32,
    pub center_y: f32,
}

// ============================================================================
// ONE-SHOT EVENTS
// ============================================================================

/// Spawned by the encounter system the frame a planet is first visited;
/// cleared at the start of the next frame. Snapshots taken between steps
/// report it so the presentation layer can show the planet popup.
#[derive(Component, Debug, Clone, Serialize, Deserialize)]
pub struct EncounterEvent {
    pub planet: String,
    pub fact: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_distance() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(3.0, 4.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_velocity_magnitude() {
        let v = Velocity::new(3.0, 4.0);
        assert!((v.magnitude() - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_player_defaults() {
        let p = Player::default();
        assert_eq!(p.radius, 20.0);
        assert!(p.friction < 1.0);
        assert!(p.max_speed > 0.0);
    }
}
