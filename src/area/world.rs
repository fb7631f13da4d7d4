//! World queries used by area resolution.
//!
//! The host world is an external collaborator. The engine asks it for a
//! broad-phase list of entities near a point and whether a block position
//! can be affected at all; the shape-specific narrowing happens in
//! [`AreaResolver`](super::AreaResolver).

use rustc_hash::FxHashSet;

use crate::core::{BlockLocation, EntityId, Location};

/// Read-only view of the host world.
pub trait SpellWorld {
    /// Every entity within `radius` of `center`, with its position.
    ///
    /// Returning a superset is fine; the resolver filters by shape.
    fn entities_near(&self, center: Location, radius: f64) -> Vec<(EntityId, Location)>;

    /// Whether effects can touch the block at `block` (e.g. it isn't air
    /// or unloaded). Defaults to every block.
    fn is_block_affectable(&self, _block: BlockLocation) -> bool {
        true
    }
}

/// In-memory world snapshot.
///
/// Holds a fixed list of positioned entities and, optionally, the set of
/// blocks that exist. Without a block set every position counts as a block.
///
/// ## Example
///
/// ```
/// use arcane_spells::area::{SpellWorld, StaticWorld};
/// use arcane_spells::core::{BlockLocation, EntityId, Location};
///
/// let world = StaticWorld::new()
///     .with_entity(EntityId(1), Location::new(1.0, 0.0, 0.0))
///     .with_entity(EntityId(2), Location::new(50.0, 0.0, 0.0))
///     .with_blocks([BlockLocation::new(0, -1, 0)]);
///
/// let near = world.entities_near(Location::default(), 5.0);
/// assert_eq!(near.len(), 1);
/// assert!(world.is_block_affectable(BlockLocation::new(0, -1, 0)));
/// assert!(!world.is_block_affectable(BlockLocation::new(0, 5, 0)));
/// ```
#[derive(Clone, Debug, Default)]
pub struct StaticWorld {
    entities: Vec<(EntityId, Location)>,
    blocks: Option<FxHashSet<BlockLocation>>,
}

impl StaticWorld {
    /// Create an empty world with every block affectable.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entity at a position.
    #[must_use]
    pub fn with_entity(mut self, entity: EntityId, location: Location) -> Self {
        self.entities.push((entity, location));
        self
    }

    /// Restrict affectable blocks to the given set (accumulates across calls).
    #[must_use]
    pub fn with_blocks(mut self, blocks: impl IntoIterator<Item = BlockLocation>) -> Self {
        self.blocks.get_or_insert_with(FxHashSet::default).extend(blocks);
        self
    }

    /// Number of entities in the snapshot.
    #[must_use]
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }
}

impl SpellWorld for StaticWorld {
    fn entities_near(&self, center: Location, radius: f64) -> Vec<(EntityId, Location)> {
        self.entities
            .iter()
            .filter(|(_, location)| center.distance_to(*location) <= radius)
            .copied()
            .collect()
    }

    fn is_block_affectable(&self, block: BlockLocation) -> bool {
        self.blocks.as_ref().is_none_or(|blocks| blocks.contains(&block))
    }
}
