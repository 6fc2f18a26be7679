//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Logical clocks only (spawn cadence is accumulated elapsed time, no callbacks)
//! - Seeded RNG only
//! - Stable iteration order (entities kept in spawn order)
//! - No rendering or platform dependencies; UI concerns surface as [`GameEvent`]s

pub mod answer;
pub mod collision;
pub mod effects;
pub mod spawn;
pub mod state;
pub mod tick;

#[cfg(test)]
pub(crate) mod testutil;

pub use collision::{nearest_face_normal, point_in_rect, reflect_velocity};
pub use effects::EffectKind;
pub use spawn::Archetype;
pub use state::{DifficultyState, Enemy, EnemyBullet, GameEvent, RunState, Shot, Simulation};
