//! Effect modifiers and per-kind candidate lists.
//!
//! A phrase lists its modifiers as one mixed list of [`SpellEffectModifier`]
//! values. [`ModifierCandidates`] splits that list into one sublist per kind
//! when the phrase is built; resolution then picks one value per kind from
//! its sublist, or the kind's default when the sublist is empty.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::rng::{choose_or, RandomSource};

use super::catalog::{Aoe, AoeShape, AoeSize, SpellStrength, SpellTarget};

/// The kinds of modifier a phrase can carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModifierKind {
    Aoe,
    Size,
    Shape,
    Strength,
    Target,
}

/// One modifier candidate, of any kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpellEffectModifier {
    Aoe(Aoe),
    Size(AoeSize),
    Shape(AoeShape),
    Strength(SpellStrength),
    Target(SpellTarget),
}

impl SpellEffectModifier {
    /// Which kind this modifier belongs to.
    #[must_use]
    pub const fn kind(self) -> ModifierKind {
        match self {
            SpellEffectModifier::Aoe(_) => ModifierKind::Aoe,
            SpellEffectModifier::Size(_) => ModifierKind::Size,
            SpellEffectModifier::Shape(_) => ModifierKind::Shape,
            SpellEffectModifier::Strength(_) => ModifierKind::Strength,
            SpellEffectModifier::Target(_) => ModifierKind::Target,
        }
    }
}

impl From<Aoe> for SpellEffectModifier {
    fn from(value: Aoe) -> Self {
        Self::Aoe(value)
    }
}

impl From<AoeSize> for SpellEffectModifier {
    fn from(value: AoeSize) -> Self {
        Self::Size(value)
    }
}

impl From<AoeShape> for SpellEffectModifier {
    fn from(value: AoeShape) -> Self {
        Self::Shape(value)
    }
}

impl From<SpellStrength> for SpellEffectModifier {
    fn from(value: SpellStrength) -> Self {
        Self::Strength(value)
    }
}

impl From<SpellTarget> for SpellEffectModifier {
    fn from(value: SpellTarget) -> Self {
        Self::Target(value)
    }
}

/// Per-kind candidate sublists derived from a phrase's modifier list.
///
/// Built once from an immutable list, so the sublists can never go stale.
/// Declaration order is preserved within each kind, and duplicates are kept:
/// listing a variant twice doubles its odds.
///
/// SmallVec keeps the common case (a handful of candidates per kind) inline.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModifierCandidates {
    pub aoes: SmallVec<[Aoe; 4]>,
    pub sizes: SmallVec<[AoeSize; 4]>,
    pub shapes: SmallVec<[AoeShape; 4]>,
    pub strengths: SmallVec<[SpellStrength; 4]>,
    pub targets: SmallVec<[SpellTarget; 4]>,
}

impl ModifierCandidates {
    /// Split a mixed modifier list into per-kind sublists.
    pub fn from_modifiers<'a>(modifiers: impl IntoIterator<Item = &'a SpellEffectModifier>) -> Self {
        let mut candidates = Self::default();
        for modifier in modifiers {
            match *modifier {
                SpellEffectModifier::Aoe(aoe) => candidates.aoes.push(aoe),
                SpellEffectModifier::Size(size) => candidates.sizes.push(size),
                SpellEffectModifier::Shape(shape) => candidates.shapes.push(shape),
                SpellEffectModifier::Strength(strength) => candidates.strengths.push(strength),
                SpellEffectModifier::Target(target) => candidates.targets.push(target),
            }
        }
        candidates
    }

    /// Number of candidates of the given kind.
    #[must_use]
    pub fn count(&self, kind: ModifierKind) -> usize {
        match kind {
            ModifierKind::Aoe => self.aoes.len(),
            ModifierKind::Size => self.sizes.len(),
            ModifierKind::Shape => self.shapes.len(),
            ModifierKind::Strength => self.strengths.len(),
            ModifierKind::Target => self.targets.len(),
        }
    }

    pub fn pick_aoe<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Aoe {
        choose_or(rng, &self.aoes, Aoe::DEFAULT)
    }

    pub fn pick_size<R: RandomSource + ?Sized>(&self, rng: &mut R) -> AoeSize {
        choose_or(rng, &self.sizes, AoeSize::DEFAULT)
    }

    pub fn pick_shape<R: RandomSource + ?Sized>(&self, rng: &mut R) -> AoeShape {
        choose_or(rng, &self.shapes, AoeShape::DEFAULT)
    }

    pub fn pick_strength<R: RandomSource + ?Sized>(&self, rng: &mut R) -> SpellStrength {
        choose_or(rng, &self.strengths, SpellStrength::DEFAULT)
    }

    pub fn pick_target<R: RandomSource + ?Sized>(&self, rng: &mut R) -> SpellTarget {
        choose_or(rng, &self.targets, SpellTarget::DEFAULT)
    }
}
