//! Spells, phrases and casts.
//!
//! - `Spell`: an ordered list of phrases
//! - `Phrase`: candidate effects plus modifiers, resolved by `burst`
//! - `SpellCast`: the shared state of one casting (log, projectiles, mailbox)
//! - `CastContext` / `BurstContext`: host services a cast runs against
//! - `ProjectileQueue`: a launcher that holds projectile phrases until impact
//!
//! ## Cast Flow
//!
//! ```text
//! Spell::cast
//!   for each phrase, in order:
//!     pick target ── Projectile ──> mark on cast, defer
//!                 └─ otherwise ───> Phrase::burst at the caster
//!   if anything was deferred: ProjectileLauncher::launch_spell_phrases
//! ```

mod message;
mod cast;
mod phrase;
mod context;
mod definition;
mod projectile;

pub use message::{normalize_message_name, MessagePayload, SpellMessage};
pub use cast::SpellCast;
pub use phrase::{BurstPoint, Phrase};
pub use context::{BurstContext, CastContext, DiscardLauncher, ProjectileLauncher};
pub use definition::{CastSummary, Spell};
pub use projectile::{ProjectileQueue, VolleyId};
