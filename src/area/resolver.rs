//! Area geometry resolution.
//!
//! Given a shape, an effective distance, a burst point and a facing
//! direction, [`AreaResolver`] computes which entities and which block
//! positions fall inside the area:
//!
//! - **Sphere**: within `distance` of the point
//! - **Cone**: within `distance`, and within the configured half-angle of
//!   the facing direction
//! - **Line**: projected onto the facing axis between `0` and `distance`,
//!   and no further than the configured half-width from that axis
//!
//! Blocks are tested by their centre. Resolution is deterministic: no
//! randomness, and the same world snapshot always yields the same sets.
//! A non-positive (or NaN) distance yields empty sets.

use rustc_hash::FxHashSet;

use crate::core::{
    BlockLocation, DirectHit, Direction, EntityId, GeometryConfig, Location,
    MAX_EFFECTIVE_DISTANCE_LIMIT,
};
use crate::modifiers::AoeShape;

use super::world::SpellWorld;

/// Tolerance for points lying exactly on a boundary.
const EPSILON: f64 = 1e-9;

/// The entities and blocks an effect touches.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AffectedArea {
    pub entities: FxHashSet<EntityId>,
    pub blocks: FxHashSet<BlockLocation>,
}

impl AffectedArea {
    /// An empty area.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// An area holding only the direct hit, if any.
    #[must_use]
    pub fn only(hit: Option<DirectHit>) -> Self {
        let mut area = Self::new();
        if let Some(hit) = hit {
            area.include(hit);
        }
        area
    }

    /// Add a direct hit. Adding something already present is a no-op.
    pub fn include(&mut self, hit: DirectHit) {
        match hit {
            DirectHit::Entity(entity) => {
                self.entities.insert(entity);
            }
            DirectHit::Block(block) => {
                self.blocks.insert(block);
            }
        }
    }

    /// Remove a direct hit. Removing something absent is a no-op.
    pub fn exclude(&mut self, hit: DirectHit) {
        match hit {
            DirectHit::Entity(entity) => {
                self.entities.remove(&entity);
            }
            DirectHit::Block(block) => {
                self.blocks.remove(&block);
            }
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty() && self.blocks.is_empty()
    }
}

/// Computes affected sets for area shapes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AreaResolver {
    config: GeometryConfig,
}

impl AreaResolver {
    /// Create a resolver with the given shape parameters.
    #[must_use]
    pub fn new(config: GeometryConfig) -> Self {
        Self { config }
    }

    /// The shape parameters in use.
    #[must_use]
    pub fn config(&self) -> &GeometryConfig {
        &self.config
    }

    /// Resolve the entities and blocks inside a shaped area.
    ///
    /// `distance` is clamped to the configured maximum, and never exceeds
    /// [`MAX_EFFECTIVE_DISTANCE_LIMIT`] even for an unvalidated config.
    pub fn resolve(
        &self,
        world: &dyn SpellWorld,
        shape: AoeShape,
        distance: f64,
        center: Location,
        direction: Direction,
    ) -> AffectedArea {
        if distance.is_nan() || distance <= 0.0 {
            return AffectedArea::new();
        }
        let distance = distance
            .min(self.config.max_effective_distance)
            .min(MAX_EFFECTIVE_DISTANCE_LIMIT);
        let reach = self.reach(shape, distance);

        let entities = world
            .entities_near(center, reach)
            .into_iter()
            .filter(|(_, location)| self.contains(shape, distance, center, direction, *location))
            .map(|(entity, _)| entity)
            .collect();

        let blocks = self.blocks_in_range(world, shape, distance, reach, center, direction);

        AffectedArea { entities, blocks }
    }

    /// Whether `point` lies inside the shape.
    #[must_use]
    pub fn contains(
        &self,
        shape: AoeShape,
        distance: f64,
        origin: Location,
        direction: Direction,
        point: Location,
    ) -> bool {
        if distance.is_nan() || distance <= 0.0 {
            return false;
        }
        let offset = origin.offset_to(point);
        let length = origin.distance_to(point);

        match shape {
            AoeShape::Sphere => length <= distance + EPSILON,
            AoeShape::Cone => {
                if length > distance + EPSILON {
                    return false;
                }
                if length <= EPSILON {
                    return true;
                }
                let cos_limit = self.config.cone_half_angle_degrees.to_radians().cos();
                direction.dot(offset) / length >= cos_limit - EPSILON
            }
            AoeShape::Line => {
                let along = direction.dot(offset);
                if along < -EPSILON || along > distance + EPSILON {
                    return false;
                }
                let perpendicular_sq = (length * length - along * along).max(0.0);
                let half_width = self.line_half_width();
                perpendicular_sq <= half_width * half_width + EPSILON
            }
        }
    }

    /// The configured line half-width, capped like distances are.
    fn line_half_width(&self) -> f64 {
        self.config.line_half_width.min(MAX_EFFECTIVE_DISTANCE_LIMIT)
    }

    /// Radius of the smallest sphere around the origin holding the whole shape.
    fn reach(&self, shape: AoeShape, distance: f64) -> f64 {
        match shape {
            AoeShape::Line => distance.hypot(self.line_half_width()),
            AoeShape::Sphere | AoeShape::Cone => distance,
        }
    }

    fn blocks_in_range(
        &self,
        world: &dyn SpellWorld,
        shape: AoeShape,
        distance: f64,
        reach: f64,
        center: Location,
        direction: Direction,
    ) -> FxHashSet<BlockLocation> {
        let low = Location::new(center.x - reach, center.y - reach, center.z - reach).block();
        let high = Location::new(center.x + reach, center.y + reach, center.z + reach).block();

        let mut blocks = FxHashSet::default();
        for x in low.x..=high.x {
            for y in low.y..=high.y {
                for z in low.z..=high.z {
                    let block = BlockLocation::new(x, y, z);
                    if self.contains(shape, distance, center, direction, block.center())
                        && world.is_block_affectable(block)
                    {
                        blocks.insert(block);
                    }
                }
            }
        }
        blocks
    }
}
