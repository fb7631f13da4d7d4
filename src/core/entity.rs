//! Entity identification.
//!
//! The host world owns its entities; the spell engine only ever sees them as
//! opaque `EntityId` handles. Direct hits, affected sets and message payloads
//! all carry these handles back to the host.
//!
//! ```
//! use arcane_spells::core::EntityId;
//!
//! let zombie = EntityId::new(17);
//! assert_eq!(zombie.raw(), 17);
//! assert_eq!(zombie.to_string(), "Entity(17)");
//! ```

use serde::{Deserialize, Serialize};

/// Handle for an entity living in the host world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u32);

impl EntityId {
    /// Create a new entity handle.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for EntityId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Entity({})", self.0)
    }
}
