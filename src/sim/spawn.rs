//! Enemy spawning
//!
//! Standard enemies come from a weighted archetype pool: a cumulative-weight
//! search over one uniform draw, falling back to the first archetype if
//! floating-point drift leaves no match. The sprayer archetype never enters
//! the pool; it spawns from its own long-period clock in `tick`.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::effects::EffectKind;
use super::state::{Enemy, Simulation};
use crate::consts::*;

/// A spawnable enemy shape: weight, tint, problem tier, and solve behavior.
///
/// Tier offsets are relative to the run's base tier and clamp at the
/// problem source's top tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Archetype {
    pub name: String,
    pub color: u32,
    pub spawn_weight: f32,
    pub tier_offset: usize,
    pub effect: EffectKind,
}

impl Simulation {
    /// Spawn one enemy from the weighted standard pool at the top edge.
    ///
    /// Descending archetypes take the current effective enemy speed; the
    /// horizontal traverser is never selected here.
    pub(crate) fn spawn_standard(&mut self) {
        if self.tuning.standard_pool.is_empty() {
            log::warn!("standard archetype pool is empty, skipping spawn");
            return;
        }
        let archetype = {
            let pool = &self.tuning.standard_pool;
            let total: f32 = pool.iter().map(|a| a.spawn_weight).sum();
            let mut draw = if total > 0.0 {
                self.rng.random_range(0.0..total)
            } else {
                0.0
            };
            let index = pool
                .iter()
                .position(|a| {
                    draw -= a.spawn_weight;
                    draw <= 0.0
                })
                .unwrap_or(0);
            pool[index].clone()
        };

        let half = Vec2::new(ENEMY_WIDTH / 2.0, ENEMY_HEIGHT / 2.0);
        let x = self.rng.random_range(half.x..FIELD_WIDTH - half.x);
        let problem = self.problem_at_offset(archetype.tier_offset);
        let speed = self.difficulty.enemy_speed;
        let id = self.next_entity_id();
        log::debug!("spawn {} ({}) at x {x:.0}", archetype.name, problem.text);
        self.enemies.push(Enemy {
            id,
            pos: Vec2::new(x, half.y),
            vel: Vec2::new(0.0, speed),
            half,
            problem,
            effect: archetype.effect,
            is_threat: true,
            color: archetype.color,
            alive: true,
        });
    }

    /// Spawn the sprayer: enters off-screen left, traverses at a fixed
    /// horizontal speed unaffected by difficulty, and never costs a life.
    pub(crate) fn spawn_sprayer(&mut self) {
        let archetype = self.tuning.sprayer.clone();
        let half = Vec2::new(ENEMY_WIDTH / 2.0, ENEMY_HEIGHT / 2.0);
        let problem = self.problem_at_offset(archetype.tier_offset);
        let id = self.next_entity_id();
        log::debug!("spawn {} ({})", archetype.name, problem.text);
        self.enemies.push(Enemy {
            id,
            pos: Vec2::new(-half.x, TRAVERSER_Y),
            vel: Vec2::new(self.tuning.sprayer_speed, 0.0),
            half,
            problem,
            effect: archetype.effect,
            is_threat: false,
            color: archetype.color,
            alive: true,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problems::Category;
    use crate::sim::testutil::{fixture, fixture_at_tier};
    use crate::tuning::Tuning;

    #[test]
    fn test_weighted_pool_reaches_every_archetype() {
        let mut fx = fixture();
        fx.sim.enemies.clear();
        for _ in 0..200 {
            fx.sim.spawn_standard();
        }
        let greens = fx.sim.enemies.iter().filter(|e| e.effect == EffectKind::Destroy).count();
        let reds = fx
            .sim
            .enemies
            .iter()
            .filter(|e| e.effect == EffectKind::ShootAndDestroy)
            .count();
        assert_eq!(greens + reds, 200);
        // 3:1 weights: both appear, greens dominate
        assert!(greens > reds);
        assert!(reds > 0);
    }

    #[test]
    fn test_zero_weight_pool_falls_back_to_first() {
        let mut tuning = Tuning::default();
        for archetype in &mut tuning.standard_pool {
            archetype.spawn_weight = 0.0;
        }
        let mut fx = crate::sim::testutil::fixture_with(tuning);
        fx.sim.enemies.clear();
        fx.sim.spawn_standard();
        assert_eq!(fx.sim.enemies[0].effect, EffectKind::Destroy);
    }

    #[test]
    fn test_standard_spawns_are_fully_on_screen_at_top() {
        let mut fx = fixture();
        fx.sim.enemies.clear();
        for _ in 0..50 {
            fx.sim.spawn_standard();
        }
        for enemy in &fx.sim.enemies {
            assert!(enemy.pos.x >= ENEMY_WIDTH / 2.0);
            assert!(enemy.pos.x <= FIELD_WIDTH - ENEMY_WIDTH / 2.0);
            assert_eq!(enemy.pos.y, ENEMY_HEIGHT / 2.0);
            assert!(enemy.is_threat);
            assert_eq!(enemy.vel, Vec2::new(0.0, 30.0));
        }
    }

    #[test]
    fn test_standard_speed_follows_difficulty() {
        let mut fx = fixture();
        fx.sim.add_score(100); // level 2: speed 33
        fx.sim.enemies.clear();
        fx.sim.spawn_standard();
        assert_eq!(fx.sim.enemies[0].vel.y, 33.0);
    }

    #[test]
    fn test_archetype_tier_offsets_and_category() {
        let mut fx = fixture();
        fx.sim.category = Some(Category::Addition);
        fx.sim.enemies.clear();
        fx.requests.borrow_mut().clear();
        for _ in 0..100 {
            fx.sim.spawn_standard();
        }
        for (enemy, request) in fx.sim.enemies.iter().zip(fx.requests.borrow().iter()) {
            match enemy.effect {
                // Base-tier archetype honors the category filter
                EffectKind::Destroy => assert_eq!(*request, (0, Some(Category::Addition))),
                // Harder archetypes draw from every category
                EffectKind::ShootAndDestroy => assert_eq!(*request, (1, None)),
                EffectKind::SprayAndDestroy => unreachable!("sprayer is not in the pool"),
            }
        }
    }

    #[test]
    fn test_sprayer_shape() {
        let mut fx = fixture();
        fx.sim.enemies.clear();
        fx.requests.borrow_mut().clear();
        fx.sim.spawn_sprayer();
        let sprayer = &fx.sim.enemies[0];
        assert!(!sprayer.is_threat);
        assert_eq!(sprayer.effect, EffectKind::SprayAndDestroy);
        assert_eq!(sprayer.pos, Vec2::new(-ENEMY_WIDTH / 2.0, TRAVERSER_Y));
        assert_eq!(sprayer.vel, Vec2::new(50.0, 0.0));
        assert_eq!(fx.requests.borrow()[0], (2, None));
    }

    #[test]
    fn test_sprayer_speed_ignores_difficulty() {
        let mut fx = fixture();
        fx.sim.add_score(300);
        fx.sim.enemies.clear();
        fx.sim.spawn_sprayer();
        assert_eq!(fx.sim.enemies[0].vel, Vec2::new(50.0, 0.0));
    }

    #[test]
    fn test_tier_requests_clamp_at_source_max() {
        // Base tier at the top: every offset clamps to the max tier (5)
        let mut fx = fixture_at_tier(5);
        fx.sim.enemies.clear();
        fx.requests.borrow_mut().clear();
        fx.sim.spawn_sprayer();
        fx.sim.spawn_standard();
        for request in fx.requests.borrow().iter() {
            assert_eq!(request.0, 5);
        }
    }
}
