//! Space Explorer - Simulation Core
//!
//! A single-threaded, frame-driven 2D exploration game: thrust the
//! explorer across a star field, fall into planetary gravity wells,
//! collect samples, and get home before the oxygen runs out. Uses
//! `bevy_ecs` for the entity-component-system architecture; rendering
//! and DOM overlays live in a separate presentation layer fed by
//! per-frame snapshots.

pub mod api;
pub mod components;
pub mod input;
pub mod js_bridge;
pub mod systems;
pub mod world;
pub mod worldgen;

pub use api::SpaceSim;
pub use components::*;
pub use input::{InputState, ThrustKey};
pub use systems::*;
pub use world::Snapshot;
pub use worldgen::{SimConfig, Viewport};
