//! Area-of-effect geometry.
//!
//! - `SpellWorld`: what the engine asks of the host world
//! - `StaticWorld`: an in-memory snapshot implementing it
//! - `AreaResolver`: shape rules turning a distance, point and direction
//!   into affected entities and blocks

mod world;
mod resolver;

pub use world::{SpellWorld, StaticWorld};
pub use resolver::{AffectedArea, AreaResolver};
