//! # arcane-spells
//!
//! A rules engine that resolves spells into concrete, area-aware effect
//! invocations.
//!
//! ## Design Principles
//!
//! 1. **Host-Agnostic**: The engine never touches a game world directly.
//!    Hosts supply world queries (`SpellWorld`), effect behaviour
//!    (`SpellEffectDefinition`) and projectile travel (`ProjectileLauncher`).
//!
//! 2. **Resolution Never Fails**: Missing modifiers fall back to defaults,
//!    effect-less phrases are no-ops, degenerate geometry yields empty sets.
//!    Only authoring and configuration return errors.
//!
//! 3. **Reproducible Randomness**: Every uniform choice draws from one
//!    `RandomSource`. Seed it and a cast replays exactly.
//!
//! ## Architecture
//!
//! - **Phrases Burst In Order**: Each phrase is logged before its effect
//!   runs, so effects can read every earlier invocation of the same cast.
//!
//! - **Persistent Cast Log**: The invocation log is an `im::Vector`, so
//!   snapshots handed to effects are O(1) clones.
//!
//! - **Deferred Projectiles**: Projectile phrases leave the synchronous pass
//!   and are handed off together with the cast that owns them.
//!
//! ## Modules
//!
//! - `core`: Entity IDs, world-space primitives, casters, RNG, configuration
//! - `modifiers`: Modifier catalog (AOE, size, shape, strength, target)
//! - `area`: Area geometry and the host world boundary
//! - `effects`: Effect definitions, invocation bundles, registry
//! - `spell`: Spells, phrases, casts, projectile hand-off
//! - `error`: Error types for authoring and configuration

pub mod core;
pub mod modifiers;
pub mod area;
pub mod effects;
pub mod spell;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    EntityId, BlockLocation, Direction, Location,
    CasterKind, DirectHit, SpellCaster,
    RandomSource, SpellRng, SpellRngState,
    GeometryConfig, SpellConfig,
};

pub use crate::modifiers::{
    Aoe, AoeShape, AoeSize, SpellStrength, SpellTarget,
    ModifierCandidates, ModifierKind, SpellEffectModifier,
};

pub use crate::area::{AffectedArea, AreaResolver, SpellWorld, StaticWorld};

pub use crate::effects::{EffectFn, EffectRegistry, SpellArgs, SpellEffect, SpellEffectDefinition};

pub use crate::spell::{
    Spell, Phrase, BurstPoint, SpellCast, CastSummary,
    SpellMessage, MessagePayload,
    BurstContext, CastContext, ProjectileLauncher, DiscardLauncher,
    ProjectileQueue, VolleyId,
};

pub use crate::error::{Result, SpellError};
