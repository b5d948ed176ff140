//! Canvas Renderer Bridge
//!
//! Converts a `Snapshot` into a compact flat buffer for the JavaScript
//! canvas renderer. The full `Snapshot` JSON carries the static session
//! data (names, facts, colors, mission text); this buffer carries only
//! what the renderer needs sixty times a second, with no per-frame
//! allocations or string traffic on the JS side.
//!
//! # Stable Buffer Contract
//!
//! The buffer is a `Vec<f32>` (a `Float32Array` once across the wasm
//! boundary) laid out as a fixed header followed by five counted
//! sections in a fixed order:
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │ HEADER (10 elements)                                       │
//! ├────────────────────────────────────────────────────────────┤
//! │ [0] frame        - frame counter                           │
//! │ [1] flags        - bit 0 thrusting, bit 1 game over,       │
//! │                    bit 2 player present                    │
//! │ [2] fuel         - 0-100                                   │
//! │ [3] oxygen       - 0-100                                   │
//! │ [4] visited      - planets visited so far                  │
//! │ [5] player x     (0.0 when bit 2 unset)                    │
//! │ [6] player y                                               │
//! │ [7] player vx                                              │
//! │ [8] player vy                                              │
//! │ [9] player radius                                          │
//! ├────────────────────────────────────────────────────────────┤
//! │ SECTIONS, each: count, then count * stride elements        │
//! │   planets    stride 4: x, y, radius, visited (0/1)         │
//! │   stars      stride 4: x, y, size, opacity                 │
//! │   debris     stride 4: x, y, size, angle                   │
//! │   comets     stride 6: x, y, size, heading, tail, hue      │
//! │   satellites stride 4: x, y, size, angle                   │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! Planet order is stable across a session, so index `i` here lines up
//! with index `i` of the JSON snapshot's planet list (for color/name).
//!
//! # Usage from JavaScript
//!
//! ```js
//! const STRIDE = { planet: 4, star: 4, debris: 4, comet: 6, sat: 4 };
//! function parse(buf) {
//!     const flags = buf[1];
//!     const thrusting = (flags & 1) !== 0;
//!     const gameOver = (flags & 2) !== 0;
//!     let off = 10;
//!     const planetCount = buf[off++];
//!     for (let i = 0; i < planetCount; i++, off += STRIDE.planet) {
//!         drawPlanet(buf[off], buf[off + 1], buf[off + 2], buf[off + 3] > 0.5);
//!     }
//!     // ... remaining sections in order
//! }
//! ```
//!
//! # Determinism
//!
//! Given the same `Snapshot`, the output is identical. Entities are
//! serialized in their snapshot order (no sorting applied).

use crate::world::Snapshot;

// ============================================================================
// CONSTANTS - STABLE BUFFER CONTRACT
// ============================================================================

/// Number of f32 values in the buffer header.
pub const HEADER_SIZE: usize = 10;

/// Elements per planet: x, y, radius, visited.
pub const PLANET_STRIDE: usize = 4;
/// Elements per star: x, y, size, opacity.
pub const STAR_STRIDE: usize = 4;
/// Elements per debris fragment: x, y, size, angle.
pub const DEBRIS_STRIDE: usize = 4;
/// Elements per comet: x, y, size, heading, tail_length, hue.
pub const COMET_STRIDE: usize = 6;
/// Elements per satellite: x, y, size, angle.
pub const SATELLITE_STRIDE: usize = 4;

/// Header flag bit: a thrust key is held and fuel remains.
pub const FLAG_THRUSTING: u32 = 1 << 0;
/// Header flag bit: terminal state latched.
pub const FLAG_GAME_OVER: u32 = 1 << 1;
/// Header flag bit: player fields of the header are meaningful.
pub const FLAG_PLAYER_PRESENT: u32 = 1 << 2;

// ============================================================================
// MAIN SERIALIZATION FUNCTION
// ============================================================================

/// Convert a snapshot into the flat render buffer.
///
/// See the module documentation for the complete layout.
pub fn snapshot_to_flatbuffer(snapshot: &Snapshot) -> Vec<f32> {
    let mut buffer = Vec::with_capacity(calculate_buffer_size(snapshot));

    let mut flags = 0u32;
    if snapshot.thrusting {
        flags |= FLAG_THRUSTING;
    }
    if snapshot.game_over {
        flags |= FLAG_GAME_OVER;
    }
    if snapshot.player.is_some() {
        flags |= FLAG_PLAYER_PRESENT;
    }

    buffer.push(snapshot.frame as f32);
    buffer.push(flags as f32);
    buffer.push(snapshot.fuel);
    buffer.push(snapshot.oxygen);
    buffer.push(snapshot.visited_planets as f32);
    match &snapshot.player {
        Some(player) => {
            buffer.push(player.x);
            buffer.push(player.y);
            buffer.push(player.vx);
            buffer.push(player.vy);
            buffer.push(player.radius);
        }
        None => buffer.extend_from_slice(&[0.0; 5]),
    }

    buffer.push(snapshot.planets.len() as f32);
    for planet in &snapshot.planets {
        buffer.push(planet.x);
        buffer.push(planet.y);
        buffer.push(planet.radius);
        buffer.push(if planet.visited { 1.0 } else { 0.0 });
    }

    buffer.push(snapshot.stars.len() as f32);
    for star in &snapshot.stars {
        buffer.push(star.x);
        buffer.push(star.y);
        buffer.push(star.size);
        buffer.push(star.opacity);
    }

    buffer.push(snapshot.debris.len() as f32);
    for debris in &snapshot.debris {
        buffer.push(debris.x);
        buffer.push(debris.y);
        buffer.push(debris.size);
        buffer.push(debris.angle);
    }

    buffer.push(snapshot.comets.len() as f32);
    for comet in &snapshot.comets {
        buffer.push(comet.x);
        buffer.push(comet.y);
        buffer.push(comet.size);
        buffer.push(comet.heading);
        buffer.push(comet.tail_length);
        buffer.push(comet.hue);
    }

    buffer.push(snapshot.satellites.len() as f32);
    for sat in &snapshot.satellites {
        buffer.push(sat.x);
        buffer.push(sat.y);
        buffer.push(sat.size);
        buffer.push(sat.angle);
    }

    debug_assert_eq!(buffer.len(), calculate_buffer_size(snapshot), "buffer size mismatch");
    buffer
}

/// Exact buffer length for a given snapshot.
pub fn calculate_buffer_size(snapshot: &Snapshot) -> usize {
    HEADER_SIZE
        + 5 // one count slot per section
        + snapshot.planets.len() * PLANET_STRIDE
        + snapshot.stars.len() * STAR_STRIDE
        + snapshot.debris.len() * DEBRIS_STRIDE
        + snapshot.comets.len() * COMET_STRIDE
        + snapshot.satellites.len() * SATELLITE_STRIDE
}

/// Decode the header flag field.
#[inline]
pub fn flags_of(buffer: &[f32]) -> u32 {
    buffer.get(1).copied().unwrap_or(0.0) as u32
}

/// True if the buffer's thrusting flag is set.
#[inline]
pub fn is_thrusting(buffer: &[f32]) -> bool {
    flags_of(buffer) & FLAG_THRUSTING != 0
}

/// True if the buffer's game-over flag is set.
#[inline]
pub fn is_game_over(buffer: &[f32]) -> bool {
    flags_of(buffer) & FLAG_GAME_OVER != 0
}
