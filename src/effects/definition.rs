//! Effect definitions.
//!
//! An effect definition is the unit of actual game behaviour: set fire,
//! heal, knock back, mark a target. The engine treats it as opaque and
//! calls one method on it with a fully resolved [`SpellArgs`] bundle.
//!
//! Definitions are shared between phrases and casts, so they are held as
//! [`SpellEffect`] (`Arc<dyn SpellEffectDefinition>`) and must be
//! `Send + Sync`.

use std::fmt;
use std::sync::Arc;

use crate::spell::SpellCast;

use super::args::SpellArgs;

/// A shared effect definition.
pub type SpellEffect = Arc<dyn SpellEffectDefinition>;

/// Game behaviour triggered by a phrase burst.
///
/// Implementations may read earlier invocations through
/// [`SpellCast::spell_args_cast`] and exchange data with later phrases
/// through the cast's mailbox. They cannot change logged invocations.
pub trait SpellEffectDefinition: Send + Sync {
    /// Name used for registry lookup and diagnostics.
    fn name(&self) -> &str;

    /// Perform the effect.
    fn perform_effect(&self, args: &SpellArgs, cast: &mut SpellCast);
}

impl fmt::Debug for dyn SpellEffectDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SpellEffect({})", self.name())
    }
}

type EffectCallback = dyn Fn(&SpellArgs, &mut SpellCast) + Send + Sync;

/// An effect definition backed by a closure.
///
/// ```
/// use arcane_spells::effects::{EffectFn, SpellEffectDefinition};
///
/// let ignite = EffectFn::new("ignite", |args, _cast| {
///     for entity in &args.affected_entities {
///         let _ = entity; // host would set it on fire here
///     }
/// });
/// assert_eq!(ignite.name(), "ignite");
/// ```
pub struct EffectFn {
    name: String,
    callback: Box<EffectCallback>,
}

impl EffectFn {
    /// Wrap a closure as a named effect.
    pub fn new(
        name: impl Into<String>,
        callback: impl Fn(&SpellArgs, &mut SpellCast) + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            callback: Box::new(callback),
        }
    }

    /// Wrap a closure and share it, ready to put in a phrase.
    pub fn shared(
        name: impl Into<String>,
        callback: impl Fn(&SpellArgs, &mut SpellCast) + Send + Sync + 'static,
    ) -> SpellEffect {
        Arc::new(Self::new(name, callback))
    }
}

impl SpellEffectDefinition for EffectFn {
    fn name(&self) -> &str {
        &self.name
    }

    fn perform_effect(&self, args: &SpellArgs, cast: &mut SpellCast) {
        (self.callback)(args, cast)
    }
}

impl fmt::Debug for EffectFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EffectFn").field("name", &self.name).finish()
    }
}
