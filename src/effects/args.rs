//! Resolved invocation bundles.

use std::sync::Arc;

use rustc_hash::FxHashSet;

use crate::core::{BlockLocation, DirectHit, Direction, EntityId, Location, SpellCaster};
use crate::modifiers::{Aoe, AoeShape, AoeSize, SpellEffectModifier, SpellStrength, SpellTarget};

use super::definition::SpellEffect;

/// Everything one effect invocation was resolved with.
///
/// Built by a phrase burst, appended to the cast log, then handed to the
/// chosen effect. Once logged it is shared read-only with every later
/// phrase of the cast, so nothing here is ever mutated.
///
/// The owning cast is not stored here; effects receive it alongside the
/// bundle.
#[derive(Clone, Debug)]
pub struct SpellArgs {
    /// The effect chosen from the phrase's candidates.
    pub effect: SpellEffect,
    /// The caster of the whole spell.
    pub caster: SpellCaster,
    /// The phrase's complete, unresolved modifier list.
    pub modifiers: Arc<[SpellEffectModifier]>,
    /// Where the phrase burst.
    pub burst_location: Location,
    /// Which way the burst faced.
    pub burst_direction: Direction,
    pub aoe: Aoe,
    pub aoe_size: AoeSize,
    pub aoe_shape: AoeShape,
    pub strength: SpellStrength,
    pub target: SpellTarget,
    /// Entities the effect applies to.
    pub affected_entities: FxHashSet<EntityId>,
    /// Block positions the effect applies to.
    pub affected_blocks: FxHashSet<BlockLocation>,
    /// What was hit before area expansion.
    pub direct_hit: Option<DirectHit>,
}

impl SpellArgs {
    /// Name of the chosen effect.
    #[must_use]
    pub fn effect_name(&self) -> &str {
        self.effect.name()
    }

    /// The directly hit entity, if the hit was an entity.
    #[must_use]
    pub fn entity_hit(&self) -> Option<EntityId> {
        self.direct_hit.and_then(DirectHit::entity)
    }

    /// The directly hit block, if the hit was a block.
    #[must_use]
    pub fn block_hit(&self) -> Option<BlockLocation> {
        self.direct_hit.and_then(DirectHit::block)
    }

    /// Area reach implied by the chosen size and shape.
    #[must_use]
    pub fn effective_distance(&self) -> f64 {
        self.aoe_shape.effective_distance(self.aoe_size)
    }

    /// The chosen strength's multiplier applied to a base magnitude.
    #[must_use]
    pub fn scaled(&self, base: f64) -> f64 {
        base * self.strength.multiplier()
    }
}
