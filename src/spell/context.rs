//! Host services a cast runs against.
//!
//! - `BurstContext`: what a single phrase burst needs (world queries, area
//!   geometry, randomness)
//! - `ProjectileLauncher`: where deferred projectile phrases are handed off
//! - `CastContext`: everything a whole cast needs, owned in one place

use crate::area::{AreaResolver, SpellWorld};
use crate::core::{RandomSource, SpellConfig, SpellRng};
use crate::error::Result;

use super::cast::SpellCast;
use super::phrase::Phrase;

/// Borrowed services for bursting phrases.
pub struct BurstContext<'a> {
    /// Broad-phase entity queries and block filtering.
    pub world: &'a dyn SpellWorld,
    /// Shape geometry.
    pub area: &'a AreaResolver,
    /// Every uniform choice of a burst draws from here.
    pub rng: &'a mut dyn RandomSource,
}

impl<'a> BurstContext<'a> {
    pub fn new(world: &'a dyn SpellWorld, area: &'a AreaResolver, rng: &'a mut dyn RandomSource) -> Self {
        Self { world, area, rng }
    }
}

/// Receives the phrases of a cast that travel as projectiles.
///
/// Called at most once per cast, after every non-projectile phrase has
/// burst, and only when at least one phrase was deferred. The launcher
/// takes ownership of the cast: when a projectile lands, burst its phrases
/// with [`Phrase::burst_on_impact`] against the same cast so they see the
/// log and mailbox of the phrases before them.
pub trait ProjectileLauncher {
    fn launch_spell_phrases(&mut self, cast: SpellCast, phrases: Vec<Phrase>);
}

/// A launcher for casters that cannot fire projectiles; deferred phrases
/// are dropped.
#[derive(Clone, Copy, Debug, Default)]
pub struct DiscardLauncher;

impl ProjectileLauncher for DiscardLauncher {
    fn launch_spell_phrases(&mut self, _cast: SpellCast, phrases: Vec<Phrase>) {
        tracing::debug!(count = phrases.len(), "discarding projectile phrases");
    }
}

/// Owned services for casting spells.
///
/// ```
/// use arcane_spells::area::StaticWorld;
/// use arcane_spells::core::SpellConfig;
/// use arcane_spells::spell::{CastContext, DiscardLauncher};
///
/// let world = StaticWorld::new();
/// let mut launcher = DiscardLauncher;
/// let config = SpellConfig::default().with_seed(42);
/// let ctx = CastContext::from_config(&config, &world, &mut launcher).unwrap();
/// assert_eq!(ctx.area().config(), &config.geometry);
/// ```
pub struct CastContext<'a> {
    world: &'a dyn SpellWorld,
    launcher: &'a mut dyn ProjectileLauncher,
    area: AreaResolver,
    rng: Box<dyn RandomSource + 'a>,
}

impl<'a> CastContext<'a> {
    /// Default geometry and an entropy-seeded RNG.
    pub fn new(world: &'a dyn SpellWorld, launcher: &'a mut dyn ProjectileLauncher) -> Self {
        Self {
            world,
            launcher,
            area: AreaResolver::default(),
            rng: Box::new(SpellRng::from_entropy()),
        }
    }

    /// Build from validated configuration. A configured seed makes every
    /// choice reproducible.
    pub fn from_config(
        config: &SpellConfig,
        world: &'a dyn SpellWorld,
        launcher: &'a mut dyn ProjectileLauncher,
    ) -> Result<Self> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => SpellRng::new(seed),
            None => SpellRng::from_entropy(),
        };
        Ok(Self {
            world,
            launcher,
            area: AreaResolver::new(config.geometry.clone()),
            rng: Box::new(rng),
        })
    }

    /// Replace the random source.
    #[must_use]
    pub fn with_rng(mut self, rng: impl RandomSource + 'a) -> Self {
        self.rng = Box::new(rng);
        self
    }

    /// Replace the area geometry.
    #[must_use]
    pub fn with_area(mut self, area: AreaResolver) -> Self {
        self.area = area;
        self
    }

    #[must_use]
    pub fn area(&self) -> &AreaResolver {
        &self.area
    }

    pub fn launcher(&mut self) -> &mut dyn ProjectileLauncher {
        &mut *self.launcher
    }

    /// Borrow the services a phrase burst needs.
    pub fn burst_context(&mut self) -> BurstContext<'_> {
        BurstContext {
            world: self.world,
            area: &self.area,
            rng: &mut *self.rng,
        }
    }
}
