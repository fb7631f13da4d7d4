//! Effect system for spell phrases.
//!
//! - `SpellEffectDefinition`: the one-method trait every effect implements
//! - `EffectFn`: closure-backed definitions
//! - `SpellArgs`: the resolved bundle an effect is invoked with
//! - `EffectRegistry`: name lookup for authoring spells
//!
//! ## Design Philosophy
//!
//! What an effect actually does to the world belongs to the host. The
//! engine decides *which* effect fires, *what* it touches and *how hard*,
//! and guarantees the invocation is logged before the effect runs.

mod definition;
mod args;
mod registry;

pub use definition::{EffectFn, SpellEffect, SpellEffectDefinition};
pub use args::SpellArgs;
pub use registry::EffectRegistry;
