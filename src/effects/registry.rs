//! Effect registry for name lookup.
//!
//! The `EffectRegistry` stores the effect definitions a host makes
//! available, so spells can be authored from effect names. Names are
//! matched trimmed and case-insensitively.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::error::{Result, SpellError};

use super::definition::{SpellEffect, SpellEffectDefinition};

/// Registry of effect definitions.
///
/// ## Example
///
/// ```
/// use arcane_spells::effects::{EffectFn, EffectRegistry};
///
/// let mut registry = EffectRegistry::new();
/// registry.register(EffectFn::new("Ignite", |_, _| {})).unwrap();
///
/// assert!(registry.get(" ignite ").is_some());
/// assert!(registry.register(EffectFn::new("IGNITE", |_, _| {})).is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct EffectRegistry {
    effects: FxHashMap<String, SpellEffect>,
}

fn registry_key(name: &str) -> String {
    name.trim().to_lowercase()
}

impl EffectRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an effect definition.
    ///
    /// Fails if an effect with the same name is already registered.
    pub fn register(&mut self, effect: impl SpellEffectDefinition + 'static) -> Result<SpellEffect> {
        self.register_shared(Arc::new(effect))
    }

    /// Register an already shared effect definition.
    pub fn register_shared(&mut self, effect: SpellEffect) -> Result<SpellEffect> {
        let key = registry_key(effect.name());
        if self.effects.contains_key(&key) {
            return Err(SpellError::DuplicateEffect(effect.name().to_string()));
        }
        self.effects.insert(key, Arc::clone(&effect));
        Ok(effect)
    }

    /// Get an effect by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<SpellEffect> {
        self.effects.get(&registry_key(name)).cloned()
    }

    /// Get an effect by name, failing if it is not registered.
    pub fn resolve(&self, name: &str) -> Result<SpellEffect> {
        self.get(name)
            .ok_or_else(|| SpellError::UnknownEffect(name.to_string()))
    }

    /// Check if a name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.effects.contains_key(&registry_key(name))
    }

    /// Get the number of registered effects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.effects.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    /// Iterate over all effect definitions.
    pub fn iter(&self) -> impl Iterator<Item = &SpellEffect> {
        self.effects.values()
    }
}
