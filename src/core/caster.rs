//! Spell casters.
//!
//! A caster is whatever sets a spell off: a player, a mob, a rune block,
//! a dispenser. The engine only needs three things from it: where it is,
//! which way it faces, and whether it stands for an entity, a block, or
//! neither. That last part is an explicit tag carried by [`CasterKind`].

use serde::{Deserialize, Serialize};

use super::entity::EntityId;
use super::space::{BlockLocation, Direction, Location};

/// What kind of world object a caster represents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CasterKind {
    /// Backed by an entity (player, mob).
    Entity(EntityId),
    /// Backed by a block in the world (rune stone, pedestal).
    Block(BlockLocation),
    /// Neither; e.g. a scripted or command-issued cast.
    Other,
}

/// The thing that hit a phrase before area expansion.
///
/// An entity and a block can never be hit at the same time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DirectHit {
    Entity(EntityId),
    Block(BlockLocation),
}

impl DirectHit {
    /// The hit entity, if this is an entity hit.
    #[must_use]
    pub fn entity(self) -> Option<EntityId> {
        match self {
            DirectHit::Entity(entity) => Some(entity),
            DirectHit::Block(_) => None,
        }
    }

    /// The hit block, if this is a block hit.
    #[must_use]
    pub fn block(self) -> Option<BlockLocation> {
        match self {
            DirectHit::Block(block) => Some(block),
            DirectHit::Entity(_) => None,
        }
    }
}

/// A caster snapshot taken when the cast starts.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpellCaster {
    /// Where the caster is.
    pub location: Location,
    /// Which way the caster faces.
    pub direction: Direction,
    /// What the caster stands for in the world.
    pub kind: CasterKind,
}

impl SpellCaster {
    /// A caster backed by an entity.
    pub fn entity(entity: EntityId, location: Location, direction: Direction) -> Self {
        Self {
            location,
            direction,
            kind: CasterKind::Entity(entity),
        }
    }

    /// A caster backed by a block. Casts from the block's centre.
    pub fn block(block: BlockLocation, direction: Direction) -> Self {
        Self {
            location: block.center(),
            direction,
            kind: CasterKind::Block(block),
        }
    }

    /// A caster with no world backing.
    pub fn other(location: Location, direction: Direction) -> Self {
        Self {
            location,
            direction,
            kind: CasterKind::Other,
        }
    }

    /// The direct hit a phrase bursting on the caster itself receives.
    ///
    /// `None` for casters that are neither entity nor block backed.
    #[must_use]
    pub fn direct_hit(&self) -> Option<DirectHit> {
        match self.kind {
            CasterKind::Entity(entity) => Some(DirectHit::Entity(entity)),
            CasterKind::Block(block) => Some(DirectHit::Block(block)),
            CasterKind::Other => None,
        }
    }

    /// The backing entity, if any.
    #[must_use]
    pub fn caster_entity(&self) -> Option<EntityId> {
        match self.kind {
            CasterKind::Entity(entity) => Some(entity),
            _ => None,
        }
    }

    /// The backing block, if any.
    #[must_use]
    pub fn block_location(&self) -> Option<BlockLocation> {
        match self.kind {
            CasterKind::Block(block) => Some(block),
            _ => None,
        }
    }
}
