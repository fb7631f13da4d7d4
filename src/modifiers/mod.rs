//! Effect modifiers.
//!
//! - `catalog`: the closed variant sets and their defaults
//! - `modifier`: the mixed modifier type and per-kind candidate lists

mod catalog;
mod modifier;

pub use catalog::{Aoe, AoeShape, AoeSize, SpellStrength, SpellTarget};
pub use modifier::{ModifierCandidates, ModifierKind, SpellEffectModifier};
