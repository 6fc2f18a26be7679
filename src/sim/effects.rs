//! Solved-problem effect behaviors
//!
//! A closed set of stateless behaviors, one of which is bound to every
//! enemy at spawn time. Every effect destroys its enemy and awards the
//! fixed score; the richer variants additionally put new projectiles in
//! flight. Executing an effect against an already-dead enemy is a no-op.

use serde::{Deserialize, Serialize};

use super::state::Simulation;

/// The behavior invoked when an enemy's problem is solved (or the enemy is
/// struck by a projectile).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectKind {
    /// Explode and score
    Destroy,
    /// Retaliate with a diagonal burst of bouncing bullets, then explode
    ShootAndDestroy,
    /// Emit a full radial spray of bouncing bullets, then explode
    SprayAndDestroy,
}

impl EffectKind {
    pub fn execute(self, sim: &mut Simulation, enemy_id: u32) {
        let Some(enemy) = sim.enemies.iter().find(|e| e.id == enemy_id) else {
            return;
        };
        if !enemy.alive {
            return;
        }
        let pos = enemy.pos;
        match self {
            EffectKind::Destroy => {}
            EffectKind::ShootAndDestroy => sim.spawn_retaliation_bullets(pos),
            EffectKind::SprayAndDestroy => sim.spawn_spray_bullets(pos),
        }
        let _ = sim.destroy_enemy(enemy_id);
    }
}
