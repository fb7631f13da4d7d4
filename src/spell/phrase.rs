//! Spell phrases and the burst algorithm.
//!
//! A phrase is one step of a spell: a list of candidate
//! effects plus a mixed list of modifiers. Bursting a phrase resolves it
//! into a single [`SpellArgs`] invocation:
//!
//! 1. Pick one effect uniformly from the candidates (no effects: no-op)
//! 2. Pick an AOE, size, shape and strength uniformly from the modifiers of
//!    that kind, falling back to the kind's default when there are none
//! 3. Compute the affected entities and blocks for the AOE mode
//! 4. Append the invocation to the cast log, then perform the effect

use std::sync::Arc;

use crate::core::{choose_from, DirectHit, Direction, Location};
use crate::area::AffectedArea;
use crate::effects::{EffectRegistry, SpellArgs, SpellEffect};
use crate::error::Result;
use crate::modifiers::{
    Aoe, AoeShape, AoeSize, ModifierCandidates, SpellEffectModifier, SpellStrength, SpellTarget,
};

use super::cast::SpellCast;
use super::context::BurstContext;

#[derive(Debug)]
struct PhraseInner {
    effects: Vec<SpellEffect>,
    modifiers: Arc<[SpellEffectModifier]>,
    candidates: ModifierCandidates,
}

/// One step of a spell.
///
/// Immutable once built. Cloning is O(1) and clones share identity, see
/// [`Phrase::same_phrase`].
#[derive(Clone, Debug)]
pub struct Phrase {
    inner: Arc<PhraseInner>,
}

/// Where and how a phrase bursts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BurstPoint {
    /// What was hit before area expansion, if anything.
    pub hit: Option<DirectHit>,
    pub location: Location,
    pub direction: Direction,
    /// How the phrase got here.
    pub target: SpellTarget,
}

impl BurstPoint {
    pub fn new(hit: Option<DirectHit>, location: Location, direction: Direction, target: SpellTarget) -> Self {
        Self {
            hit,
            location,
            direction,
            target,
        }
    }
}

impl Phrase {
    /// Create a phrase from candidate effects and modifiers.
    ///
    /// Modifier order is kept, and so are duplicates.
    pub fn new(
        effects: impl IntoIterator<Item = SpellEffect>,
        modifiers: impl IntoIterator<Item = SpellEffectModifier>,
    ) -> Self {
        let modifiers: Arc<[SpellEffectModifier]> = modifiers.into_iter().collect();
        let candidates = ModifierCandidates::from_modifiers(modifiers.iter());
        Self {
            inner: Arc::new(PhraseInner {
                effects: effects.into_iter().collect(),
                modifiers,
                candidates,
            }),
        }
    }

    /// Create a phrase with exactly one effect.
    pub fn single(effect: SpellEffect, modifiers: impl IntoIterator<Item = SpellEffectModifier>) -> Self {
        Self::new([effect], modifiers)
    }

    /// Create a phrase from registered effect names.
    ///
    /// Fails on the first name the registry does not know.
    pub fn from_names<'a>(
        registry: &EffectRegistry,
        names: impl IntoIterator<Item = &'a str>,
        modifiers: impl IntoIterator<Item = SpellEffectModifier>,
    ) -> Result<Self> {
        let effects = names
            .into_iter()
            .map(|name| registry.resolve(name))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(effects, modifiers))
    }

    /// The effects this phrase can invoke.
    #[must_use]
    pub fn possible_spell_effects(&self) -> &[SpellEffect] {
        &self.inner.effects
    }

    /// The full modifier list, in declaration order.
    #[must_use]
    pub fn modifiers(&self) -> &[SpellEffectModifier] {
        &self.inner.modifiers
    }

    /// The modifiers split per kind.
    #[must_use]
    pub fn candidates(&self) -> &ModifierCandidates {
        &self.inner.candidates
    }

    #[must_use]
    pub fn possible_aoes(&self) -> &[Aoe] {
        &self.inner.candidates.aoes
    }

    #[must_use]
    pub fn possible_sizes(&self) -> &[AoeSize] {
        &self.inner.candidates.sizes
    }

    #[must_use]
    pub fn possible_shapes(&self) -> &[AoeShape] {
        &self.inner.candidates.shapes
    }

    #[must_use]
    pub fn possible_strengths(&self) -> &[SpellStrength] {
        &self.inner.candidates.strengths
    }

    #[must_use]
    pub fn possible_targets(&self) -> &[SpellTarget] {
        &self.inner.candidates.targets
    }

    /// Whether both handles refer to the same phrase (not merely equal content).
    #[must_use]
    pub fn same_phrase(&self, other: &Phrase) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Burst this phrase at a point.
    ///
    /// Returns the logged invocation, or `None` if the phrase has no
    /// effects (in which case nothing is logged or performed).
    pub fn burst(
        &self,
        cast: &mut SpellCast,
        point: BurstPoint,
        ctx: &mut BurstContext<'_>,
    ) -> Option<Arc<SpellArgs>> {
        let Some(effect) = choose_from(&mut *ctx.rng, &self.inner.effects).cloned() else {
            tracing::trace!("phrase has no effects, nothing to burst");
            return None;
        };

        let candidates = &self.inner.candidates;
        let aoe = candidates.pick_aoe(&mut *ctx.rng);
        let aoe_size = candidates.pick_size(&mut *ctx.rng);
        let aoe_shape = candidates.pick_shape(&mut *ctx.rng);
        let strength = candidates.pick_strength(&mut *ctx.rng);

        let area = if aoe.uses_area() {
            let mut area = ctx.area.resolve(
                ctx.world,
                aoe_shape,
                aoe_shape.effective_distance(aoe_size),
                point.location,
                point.direction,
            );
            if let Some(hit) = point.hit {
                if aoe.includes_target() {
                    area.include(hit);
                } else {
                    area.exclude(hit);
                }
            }
            area
        } else {
            AffectedArea::only(point.hit)
        };

        tracing::trace!(
            effect = effect.name(),
            aoe = aoe.name(),
            size = aoe_size.name(),
            shape = aoe_shape.name(),
            strength = strength.name(),
            entities = area.entities.len(),
            blocks = area.blocks.len(),
            "phrase burst"
        );

        let args = Arc::new(SpellArgs {
            effect: Arc::clone(&effect),
            caster: cast.caster().clone(),
            modifiers: Arc::clone(&self.inner.modifiers),
            burst_location: point.location,
            burst_direction: point.direction,
            aoe,
            aoe_size,
            aoe_shape,
            strength,
            target: point.target,
            affected_entities: area.entities,
            affected_blocks: area.blocks,
            direct_hit: point.hit,
        });

        cast.add_spell_args(Arc::clone(&args));
        effect.perform_effect(&args, cast);
        Some(args)
    }

    /// Burst this phrase where its projectile struck.
    pub fn burst_on_impact(
        &self,
        cast: &mut SpellCast,
        hit: Option<DirectHit>,
        location: Location,
        direction: Direction,
        ctx: &mut BurstContext<'_>,
    ) -> Option<Arc<SpellArgs>> {
        let point = BurstPoint::new(hit, location, direction, SpellTarget::Projectile);
        self.burst(cast, point, ctx)
    }
}
