//! In-memory projectile launcher.
//!
//! Launched phrases are held as volleys until the host reports where the
//! projectile landed. There is no flight simulation: the host owns travel
//! and collision, the queue only keeps each cast alive until impact.
//!
//! ## Behavior
//!
//! - `launch_spell_phrases()`: stores the cast and its phrases as one volley
//! - `impact()`: bursts every phrase of the volley at the impact point, in
//!   order, and returns the finished cast
//! - `fizzle()`: drops a volley without bursting anything

use serde::{Deserialize, Serialize};

use crate::core::{DirectHit, Direction, Location};

use super::cast::SpellCast;
use super::context::{BurstContext, ProjectileLauncher};
use super::phrase::Phrase;

/// Identifies a launched volley.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VolleyId(pub u64);

/// A cast's projectile phrases, in flight.
#[derive(Clone, Debug)]
struct Volley {
    id: VolleyId,
    cast: SpellCast,
    phrases: Vec<Phrase>,
}

/// Projectile launcher that queues volleys until impact.
#[derive(Clone, Debug, Default)]
pub struct ProjectileQueue {
    in_flight: Vec<Volley>,
    next_id: u64,
}

impl ProjectileQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of volleys still in flight.
    #[must_use]
    pub fn in_flight_count(&self) -> usize {
        self.in_flight.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.in_flight.is_empty()
    }

    /// Ids of the volleys in flight, oldest first.
    pub fn volley_ids(&self) -> impl Iterator<Item = VolleyId> + '_ {
        self.in_flight.iter().map(|volley| volley.id)
    }

    /// The phrases carried by a volley.
    #[must_use]
    pub fn phrases(&self, id: VolleyId) -> Option<&[Phrase]> {
        self.find(id).map(|index| self.in_flight[index].phrases.as_slice())
    }

    /// The cast a volley belongs to.
    #[must_use]
    pub fn cast(&self, id: VolleyId) -> Option<&SpellCast> {
        self.find(id).map(|index| &self.in_flight[index].cast)
    }

    /// Burst a volley where it landed.
    ///
    /// Returns the cast once every phrase has burst, or `None` if the
    /// volley is unknown (already landed or fizzled).
    pub fn impact(
        &mut self,
        id: VolleyId,
        hit: Option<DirectHit>,
        location: Location,
        direction: Direction,
        ctx: &mut BurstContext<'_>,
    ) -> Option<SpellCast> {
        let index = self.find(id)?;
        let Volley { mut cast, phrases, .. } = self.in_flight.remove(index);

        tracing::debug!(volley = id.0, phrases = phrases.len(), "projectile impact");
        for phrase in &phrases {
            phrase.burst_on_impact(&mut cast, hit, location, direction, ctx);
        }
        Some(cast)
    }

    /// Drop a volley without bursting it.
    pub fn fizzle(&mut self, id: VolleyId) -> Option<SpellCast> {
        let index = self.find(id)?;
        tracing::debug!(volley = id.0, "projectile fizzled");
        Some(self.in_flight.remove(index).cast)
    }

    /// Drop every volley.
    pub fn clear(&mut self) {
        self.in_flight.clear();
    }

    /// The most recently launched volley.
    #[must_use]
    pub fn last_launched(&self) -> Option<VolleyId> {
        self.in_flight.last().map(|volley| volley.id)
    }

    fn find(&self, id: VolleyId) -> Option<usize> {
        self.in_flight.iter().position(|volley| volley.id == id)
    }
}

impl ProjectileLauncher for ProjectileQueue {
    fn launch_spell_phrases(&mut self, cast: SpellCast, phrases: Vec<Phrase>) {
        if phrases.is_empty() {
            return;
        }
        let id = VolleyId(self.next_id);
        self.next_id += 1;
        tracing::debug!(volley = id.0, phrases = phrases.len(), "volley launched");
        self.in_flight.push(Volley { id, cast, phrases });
    }
}
