//! Space Explorer - browser bindings
//!
//! Exposes the Rust simulation core to the page that owns the canvas and
//! the DOM overlays (fuel/oxygen bars, planet popup, mission log,
//! inventory, mini-map). The page drives one `step()` per
//! `requestAnimationFrame` tick, forwards raw keyboard events, and reads
//! state back two ways:
//!
//! - `frame_buffer()` - the compact `Float32Array` render buffer
//!   (layout documented in `sx_sim::js_bridge`), consumed every frame.
//! - `snapshot_json()` - the full snapshot with names, facts, missions,
//!   and inventory, consumed when an overlay needs refreshing.
//!
//! The wrapper itself holds no game state; every call forwards to the
//! simulation.
//!
//! Usage from JavaScript:
//! ```js
//! const game = new SpaceExplorer(canvas.width, canvas.height);
//! window.addEventListener("keydown", (e) => game.key_down(e.key));
//! window.addEventListener("keyup", (e) => game.key_up(e.key));
//! function loop() {
//!     game.step();
//!     render(game.frame_buffer());
//!     requestAnimationFrame(loop);
//! }
//! ```

use wasm_bindgen::prelude::*;

use sx_sim::js_bridge::snapshot_to_flatbuffer;
use sx_sim::SpaceSim;

/// Browser-facing wrapper around the simulation core.
#[wasm_bindgen]
pub struct SpaceExplorer {
    sim: SpaceSim,
}

#[wasm_bindgen]
impl SpaceExplorer {
    /// Create a session sized to the canvas. Pass zeroes if the canvas
    /// is not laid out yet and call `resize` once it is.
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> SpaceExplorer {
        #[cfg(feature = "console_error_panic_hook")]
        console_error_panic_hook::set_once();

        SpaceExplorer {
            sim: SpaceSim::new(width, height),
        }
    }

    /// Re-measure contract: forward container resize events here.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.sim.resize(width, height);
    }

    /// Forward a `keydown` event's `key` value.
    pub fn key_down(&mut self, key: &str) {
        self.sim.key_down(key);
    }

    /// Forward a `keyup` event's `key` value.
    pub fn key_up(&mut self, key: &str) {
        self.sim.key_up(key);
    }

    /// Advance the simulation by one animation frame.
    pub fn step(&mut self) {
        self.sim.step();
    }

    /// Compact per-frame render buffer (becomes a `Float32Array`).
    pub fn frame_buffer(&mut self) -> Vec<f32> {
        snapshot_to_flatbuffer(&self.sim.snapshot())
    }

    /// Full snapshot as JSON, for overlay refreshes and the popup.
    pub fn snapshot_json(&mut self) -> String {
        self.sim.snapshot_json()
    }

    /// Restart the session (the game-over panel's restart button).
    pub fn reset(&mut self) {
        self.sim.reset();
    }

    /// Current frame number.
    pub fn current_frame(&self) -> u64 {
        self.sim.current_frame()
    }

    /// True once a terminal state has latched.
    pub fn is_over(&self) -> bool {
        self.sim.is_over()
    }

    /// Fuel percentage for the HUD bar.
    pub fn fuel(&self) -> f32 {
        self.sim.fuel()
    }

    /// Oxygen percentage for the HUD bar.
    pub fn oxygen(&self) -> f32 {
        self.sim.oxygen()
    }

    /// Visited-planet count for the HUD.
    pub fn visited_planets(&self) -> u32 {
        self.sim.visited_planets()
    }
}
