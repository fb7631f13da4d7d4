//! The modifier catalog.
//!
//! Each modifier kind is a closed set of variants with its own parameters
//! and exactly one default, used when a phrase lists no candidate of that
//! kind. Variants are plain `Copy` values, so the catalog is immutable and
//! freely shared.
//!
//! | Kind            | Variants                                      | Default        |
//! |-----------------|-----------------------------------------------|----------------|
//! | `Aoe`           | TargetOnly, AroundTarget, TargetAndAroundTarget | TargetOnly   |
//! | `AoeSize`       | Small (2), Medium (4), Large (8)              | Medium         |
//! | `AoeShape`      | Sphere (×1), Cone (×1.5), Line (×2)           | Sphere         |
//! | `SpellStrength` | Weak (×0.5), Normal (×1), Strong (×1.5)       | Normal         |
//! | `SpellTarget`   | Caster, Projectile                            | Caster         |

use serde::{Deserialize, Serialize};

/// Which entities and blocks beyond the direct hit an effect touches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Aoe {
    /// Only the direct hit.
    TargetOnly,
    /// Everything in the area except the direct hit.
    AroundTarget,
    /// Everything in the area plus the direct hit.
    TargetAndAroundTarget,
}

impl Aoe {
    pub const ALL: [Aoe; 3] = [Aoe::TargetOnly, Aoe::AroundTarget, Aoe::TargetAndAroundTarget];
    pub const DEFAULT: Aoe = Aoe::TargetOnly;

    /// Whether the area scan contributes to the affected sets.
    #[must_use]
    pub const fn uses_area(self) -> bool {
        !matches!(self, Aoe::TargetOnly)
    }

    /// Whether the direct hit belongs to the affected sets.
    #[must_use]
    pub const fn includes_target(self) -> bool {
        !matches!(self, Aoe::AroundTarget)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Aoe::TargetOnly => "target only",
            Aoe::AroundTarget => "around target",
            Aoe::TargetAndAroundTarget => "target and around target",
        }
    }
}

impl Default for Aoe {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Base reach of an area.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AoeSize {
    Small,
    Medium,
    Large,
}

impl AoeSize {
    pub const ALL: [AoeSize; 3] = [AoeSize::Small, AoeSize::Medium, AoeSize::Large];
    pub const DEFAULT: AoeSize = AoeSize::Medium;

    /// Base distance in blocks, before the shape's size modifier.
    #[must_use]
    pub const fn distance(self) -> f64 {
        match self {
            AoeSize::Small => 2.0,
            AoeSize::Medium => 4.0,
            AoeSize::Large => 8.0,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            AoeSize::Small => "small",
            AoeSize::Medium => "medium",
            AoeSize::Large => "large",
        }
    }
}

impl Default for AoeSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Geometric shape of an area.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AoeShape {
    /// Everything within a radius of the burst point.
    Sphere,
    /// A cone opening from the burst point along the burst direction.
    Cone,
    /// A narrow beam from the burst point along the burst direction.
    Line,
}

impl AoeShape {
    pub const ALL: [AoeShape; 3] = [AoeShape::Sphere, AoeShape::Cone, AoeShape::Line];
    pub const DEFAULT: AoeShape = AoeShape::Sphere;

    /// Multiplier applied to the size's base distance.
    ///
    /// Narrow shapes reach further for the same size.
    #[must_use]
    pub const fn size_modifier(self) -> f64 {
        match self {
            AoeShape::Sphere => 1.0,
            AoeShape::Cone => 1.5,
            AoeShape::Line => 2.0,
        }
    }

    /// Effective distance of this shape at the given size.
    #[must_use]
    pub fn effective_distance(self, size: AoeSize) -> f64 {
        size.distance() * self.size_modifier()
    }

    pub const fn name(self) -> &'static str {
        match self {
            AoeShape::Sphere => "sphere",
            AoeShape::Cone => "cone",
            AoeShape::Line => "line",
        }
    }
}

impl Default for AoeShape {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// How hard an effect hits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpellStrength {
    Weak,
    Normal,
    Strong,
}

impl SpellStrength {
    pub const ALL: [SpellStrength; 3] =
        [SpellStrength::Weak, SpellStrength::Normal, SpellStrength::Strong];
    pub const DEFAULT: SpellStrength = SpellStrength::Normal;

    /// Scale factor effects apply to their magnitude.
    #[must_use]
    pub const fn multiplier(self) -> f64 {
        match self {
            SpellStrength::Weak => 0.5,
            SpellStrength::Normal => 1.0,
            SpellStrength::Strong => 1.5,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            SpellStrength::Weak => "weak",
            SpellStrength::Normal => "normal",
            SpellStrength::Strong => "strong",
        }
    }
}

impl Default for SpellStrength {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// How a phrase reaches its target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpellTarget {
    /// Bursts immediately on the caster.
    Caster,
    /// Deferred until a launched projectile impacts.
    Projectile,
}

impl SpellTarget {
    pub const ALL: [SpellTarget; 2] = [SpellTarget::Caster, SpellTarget::Projectile];
    pub const DEFAULT: SpellTarget = SpellTarget::Caster;

    #[must_use]
    pub const fn is_projectile(self) -> bool {
        matches!(self, SpellTarget::Projectile)
    }

    pub const fn name(self) -> &'static str {
        match self {
            SpellTarget::Caster => "caster",
            SpellTarget::Projectile => "projectile",
        }
    }
}

impl Default for SpellTarget {
    fn default() -> Self {
        Self::DEFAULT
    }
}
