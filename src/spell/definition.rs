//! Spells and the cast algorithm.

use std::sync::Arc;

use im::Vector;

use crate::core::SpellCaster;
use crate::effects::SpellArgs;

use super::cast::SpellCast;
use super::context::{BurstContext, CastContext};
use super::phrase::{BurstPoint, Phrase};

/// An ordered list of phrases, as written into a book or scroll.
///
/// Cloning is O(1).
#[derive(Clone, Debug)]
pub struct Spell {
    phrases: Arc<[Phrase]>,
}

impl Default for Spell {
    fn default() -> Self {
        Self::new([])
    }
}

/// What happened immediately during a cast.
#[derive(Clone, Debug)]
pub struct CastSummary {
    /// Invocations logged during the synchronous part of the cast.
    pub invocations: Vector<Arc<SpellArgs>>,
    /// Number of phrases handed to the projectile launcher.
    pub phrases_deferred: usize,
}

impl CastSummary {
    /// Number of phrases that burst at the caster.
    #[must_use]
    pub fn phrases_burst(&self) -> usize {
        self.invocations.len()
    }
}

impl Spell {
    pub fn new(phrases: impl IntoIterator<Item = Phrase>) -> Self {
        Self {
            phrases: phrases.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn phrases(&self) -> &[Phrase] {
        &self.phrases
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    /// Cast the spell and hand any projectile phrases to the launcher.
    ///
    /// Phrases are visited in order. Each picks a target: projectile
    /// phrases are deferred, every other phrase bursts at the caster
    /// straight away, with the caster itself as the direct hit.
    pub fn cast(&self, caster: SpellCaster, ctx: &mut CastContext<'_>) -> CastSummary {
        tracing::debug!(phrases = self.phrases.len(), caster = ?caster.kind, "casting spell");
        let (cast, deferred) = {
            let mut burst = ctx.burst_context();
            self.cast_synchronous(caster, &mut burst)
        };

        let summary = CastSummary {
            invocations: cast.spell_args_cast(),
            phrases_deferred: deferred.len(),
        };

        if summary.phrases_deferred > 0 {
            tracing::debug!(
                burst = summary.phrases_burst(),
                deferred = summary.phrases_deferred,
                "launching projectile phrases"
            );
            ctx.launcher().launch_spell_phrases(cast, deferred);
        }

        tracing::debug!(burst = summary.phrases_burst(), "cast finished");
        summary
    }

    /// Run the synchronous part of a cast.
    ///
    /// Returns the cast and the phrases it deferred, in order. Deferred
    /// phrases are also marked on the cast, but only the returned list is
    /// meant for launch: effects may mark further phrases on the cast.
    pub fn cast_synchronous(
        &self,
        caster: SpellCaster,
        ctx: &mut BurstContext<'_>,
    ) -> (SpellCast, Vec<Phrase>) {
        let location = caster.location;
        let direction = caster.direction;
        let hit = caster.direct_hit();
        let mut cast = SpellCast::new(self.clone(), caster, location, direction);
        let mut deferred = Vec::new();

        for phrase in self.phrases.iter() {
            let target = phrase.candidates().pick_target(&mut *ctx.rng);
            if target.is_projectile() {
                cast.mark_as_projectile_phrase(phrase.clone());
                deferred.push(phrase.clone());
                continue;
            }
            phrase.burst(&mut cast, BurstPoint::new(hit, location, direction, target), ctx);
        }

        (cast, deferred)
    }
}
