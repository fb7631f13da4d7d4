//! Core engine types: entities, world-space primitives, casters, RNG, configuration.
//!
//! Nothing in here knows about spells. These are the value types the rest
//! of the engine and the host exchange at the boundary.

pub mod entity;
pub mod space;
pub mod caster;
pub mod rng;
pub mod config;

pub use entity::EntityId;
pub use space::{BlockLocation, Direction, Location};
pub use caster::{CasterKind, DirectHit, SpellCaster};
pub use rng::{choose_from, choose_or, RandomSource, SpellRng, SpellRngState};
pub use config::{GeometryConfig, SpellConfig, MAX_EFFECTIVE_DISTANCE_LIMIT};
