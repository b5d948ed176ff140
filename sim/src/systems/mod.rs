//! ECS Systems for the Space Explorer simulation.
//!
//! Systems contain the game logic that operates on components.
//!
//! ## Frame Pipeline
//!
//! The schedule runs one chained sequence per frame:
//!
//! 1. `clear_encounter_events_system` - drop last frame's one-shot events
//! 2. `thrust_system` - held keys add velocity
//! 3. `gravity_system` - zone attraction, additive
//! 4. `speed_limit_system` - direction-preserving cap
//! 5. `friction_system` - per-frame damping
//! 6. `drain_system` - fuel (thrusting) and oxygen (always)
//! 7. `integrate_system` - velocity into position
//! 8. `boundary_system` - clamp + inelastic bounce at the edges
//! 9. `encounter_system` - first-visit detection, inventory, missions
//! 10. `terminal_system` - latch depletion / completion end states
//! 11. ambient drift (`star_drift_system`, `debris_drift_system`,
//!     `comet_drift_system`, `satellite_orbit_system`) - decorative
//!     motion, also runs after the terminal latch
//!
//! Steps 2-10 skip their work while the terminal state is latched.

pub mod ambient;
pub mod encounter;
pub mod gravity;
pub mod life_support;
pub mod movement;
pub mod status;
pub mod thrust;

pub use ambient::*;
pub use encounter::*;
pub use gravity::*;
pub use life_support::*;
pub use movement::*;
pub use status::*;
pub use thrust::*;
