//! Per-cast shared state.
//!
//! A [`SpellCast`] is created fresh every time a spell is cast and lives
//! until the cast is over, including any deferred projectile phrases. It
//! is the only mutable state of a cast:
//!
//! - the invocation log: one [`SpellArgs`] per phrase burst, append-only
//! - the projectile phrases deferred for launch, append-only
//! - the mailbox: named messages passed from one effect to later ones
//!
//! ## Mailbox Semantics
//!
//! A name holds at most one message. [`SpellCast::pass_message`] is
//! first-writer-wins and reports a collision by returning the message that
//! was already there; [`SpellCast::force_message`] overwrites and returns
//! what it replaced.
//!
//! ```
//! use arcane_spells::core::{Direction, Location, SpellCaster};
//! use arcane_spells::spell::{Spell, SpellCast, SpellMessage};
//!
//! let caster = SpellCaster::other(Location::default(), Direction::FORWARD);
//! let mut cast = SpellCast::new(Spell::default(), caster.clone(), caster.location, caster.direction);
//!
//! assert!(cast.pass_message(SpellMessage::flag("Marked")).is_none());
//! assert!(cast.pass_message(SpellMessage::flag("marked")).is_some());
//! assert!(cast.get_message(" MARKED ").is_some());
//! ```

use std::sync::Arc;

use im::Vector;
use rustc_hash::FxHashMap;

use crate::core::{Direction, Location, SpellCaster};
use crate::effects::SpellArgs;

use super::message::{normalize_message_name, SpellMessage};
use super::phrase::Phrase;
use super::definition::Spell;

/// One casting of a spell.
#[derive(Clone, Debug)]
pub struct SpellCast {
    spell: Spell,
    caster: SpellCaster,
    /// Where the spell was cast from (not where its phrases burst).
    location: Location,
    /// Which way the spell was cast.
    direction: Direction,
    /// Invocations of phrases already burst, oldest first.
    phrases_cast: Vector<Arc<SpellArgs>>,
    /// Phrases of this cast travelling as projectiles, in launch order.
    projectile_phrases: Vec<Phrase>,
    messages: FxHashMap<String, SpellMessage>,
}

impl SpellCast {
    /// Start a new cast.
    pub fn new(spell: Spell, caster: SpellCaster, location: Location, direction: Direction) -> Self {
        Self {
            spell,
            caster,
            location,
            direction,
            phrases_cast: Vector::new(),
            projectile_phrases: Vec::new(),
            messages: FxHashMap::default(),
        }
    }

    /// Append a phrase invocation to the log.
    pub(crate) fn add_spell_args(&mut self, args: Arc<SpellArgs>) {
        self.phrases_cast.push_back(args);
    }

    /// Leave a message for later phrases, unless the name is already taken.
    ///
    /// Returns `None` when the message was stored. Returns the message
    /// already stored under that name on collision, in which case nothing
    /// changes.
    pub fn pass_message(&mut self, message: SpellMessage) -> Option<SpellMessage> {
        if let Some(existing) = self.messages.get(message.name()) {
            tracing::debug!(name = message.name(), "message name already taken");
            return Some(existing.clone());
        }
        self.messages.insert(message.name().to_string(), message);
        None
    }

    /// Leave a message, replacing any message with the same name.
    ///
    /// Returns the replaced message, if there was one.
    pub fn force_message(&mut self, message: SpellMessage) -> Option<SpellMessage> {
        self.messages.insert(message.name().to_string(), message)
    }

    /// Look up a message by name (normalized before lookup).
    #[must_use]
    pub fn get_message(&self, name: &str) -> Option<&SpellMessage> {
        self.messages.get(&normalize_message_name(name))
    }

    /// Number of messages in the mailbox.
    #[must_use]
    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    #[must_use]
    pub fn spell(&self) -> &Spell {
        &self.spell
    }

    #[must_use]
    pub fn caster(&self) -> &SpellCaster {
        &self.caster
    }

    /// Where the spell was cast from.
    #[must_use]
    pub fn location(&self) -> Location {
        self.location
    }

    /// Which way the spell was cast.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Snapshot of the invocation log, oldest first.
    ///
    /// O(1); later bursts do not show up in a snapshot already taken.
    #[must_use]
    pub fn spell_args_cast(&self) -> Vector<Arc<SpellArgs>> {
        self.phrases_cast.clone()
    }

    /// The most recent invocation, if any phrase has burst yet.
    #[must_use]
    pub fn last_spell_args(&self) -> Option<&Arc<SpellArgs>> {
        self.phrases_cast.back()
    }

    /// Number of logged invocations.
    #[must_use]
    pub fn invocation_count(&self) -> usize {
        self.phrases_cast.len()
    }

    /// Phrases of this cast that travel as projectiles, in launch order.
    #[must_use]
    pub fn projectile_phrases(&self) -> &[Phrase] {
        &self.projectile_phrases
    }

    /// Record that a phrase is, for this cast, delivered by projectile.
    pub fn mark_as_projectile_phrase(&mut self, phrase: Phrase) {
        self.projectile_phrases.push(phrase);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spell::MessagePayload;

    fn new_cast() -> SpellCast {
        let caster = SpellCaster::other(Location::new(1.0, 2.0, 3.0), Direction::UP);
        SpellCast::new(Spell::default(), caster.clone(), caster.location, caster.direction)
    }

    #[test]
    fn test_new_cast_is_empty() {
        let cast = new_cast();
        assert_eq!(cast.invocation_count(), 0);
        assert!(cast.last_spell_args().is_none());
        assert!(cast.projectile_phrases().is_empty());
        assert_eq!(cast.message_count(), 0);
        assert_eq!(cast.location(), Location::new(1.0, 2.0, 3.0));
        assert_eq!(cast.direction(), Direction::UP);
    }

    #[test]
    fn test_pass_message_first_writer_wins() {
        let mut cast = new_cast();
        let first = SpellMessage::new("charge", MessagePayload::Integer(1));
        let second = SpellMessage::new("Charge", MessagePayload::Integer(2));

        assert_eq!(cast.pass_message(first.clone()), None);
        assert_eq!(cast.pass_message(second), Some(first.clone()));
        assert_eq!(cast.get_message("charge"), Some(&first));
        assert_eq!(cast.message_count(), 1);
    }

    #[test]
    fn test_force_message_overwrites() {
        let mut cast = new_cast();
        let first = SpellMessage::new("charge", MessagePayload::Integer(1));
        let second = SpellMessage::new("charge", MessagePayload::Integer(2));

        assert_eq!(cast.force_message(first.clone()), None);
        assert_eq!(cast.force_message(second.clone()), Some(first));
        assert_eq!(cast.get_message("CHARGE "), Some(&second));
    }

    #[test]
    fn test_get_missing_message() {
        let cast = new_cast();
        assert!(cast.get_message("nothing").is_none());
    }

    #[test]
    fn test_mark_projectile_phrases_in_order() {
        let mut cast = new_cast();
        let a = Phrase::new([], []);
        let b = Phrase::new([], []);

        cast.mark_as_projectile_phrase(a.clone());
        cast.mark_as_projectile_phrase(b.clone());

        assert_eq!(cast.projectile_phrases().len(), 2);
        assert!(cast.projectile_phrases()[0].same_phrase(&a));
        assert!(cast.projectile_phrases()[1].same_phrase(&b));
    }
}
